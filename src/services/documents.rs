//! Extração de texto de arquivos enviados em `/upload`

use ia_service::{extract_pdf_text, IaServiceError};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Nenhum arquivo enviado (campo 'file')")]
    MissingFile,

    #[error("Tipo de arquivo não suportado: '{0}'. Envie .txt ou .pdf")]
    UnsupportedType(String),

    #[error("Arquivo excede o limite de {max} bytes ({size} recebidos)")]
    TooLarge { size: usize, max: usize },

    #[error("Arquivo .txt não está codificado em UTF-8")]
    InvalidEncoding,

    #[error("Não foi possível ler o PDF: {0}")]
    PdfError(String),

    #[error("O PDF não contém texto extraível")]
    NoText,
}

/// Formatos aceitos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Text,
    Pdf,
}

impl DocumentKind {
    /// Detecta o formato pela extensão do nome do arquivo (sem diferenciar caixa)
    pub fn from_filename(filename: &str) -> Result<Self, DocumentError> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "txt" => Ok(DocumentKind::Text),
            "pdf" => Ok(DocumentKind::Pdf),
            _ => Err(DocumentError::UnsupportedType(filename.to_string())),
        }
    }
}

/// Valida tipo e tamanho e devolve o texto do arquivo
pub fn extract_upload(filename: &str, bytes: &[u8], max_bytes: usize) -> Result<String, DocumentError> {
    let kind = DocumentKind::from_filename(filename)?;

    if bytes.len() > max_bytes {
        return Err(DocumentError::TooLarge {
            size: bytes.len(),
            max: max_bytes,
        });
    }

    match kind {
        DocumentKind::Text => {
            let text = std::str::from_utf8(bytes).map_err(|_| DocumentError::InvalidEncoding)?;
            Ok(text.strip_prefix('\u{feff}').unwrap_or(text).to_string())
        }
        DocumentKind::Pdf => extract_pdf_text(bytes).map_err(|e| match e {
            IaServiceError::NoText => DocumentError::NoText,
            other => DocumentError::PdfError(other.to_string()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    const MAX: usize = 10 * 1024 * 1024;

    /// PDF de uma página; `None` gera página sem operações de texto
    fn pdf_bytes(text: Option<&str>) -> Vec<u8> {
        let operations = match text {
            Some(text) => vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
            None => vec![],
        };

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }

    #[test]
    fn test_kind_from_filename() {
        assert_eq!(DocumentKind::from_filename("email.txt").unwrap(), DocumentKind::Text);
        assert_eq!(DocumentKind::from_filename("EMAIL.PDF").unwrap(), DocumentKind::Pdf);
        assert!(matches!(
            DocumentKind::from_filename("relatorio.docx"),
            Err(DocumentError::UnsupportedType(_))
        ));
        assert!(DocumentKind::from_filename("sem_extensao").is_err());
        assert!(DocumentKind::from_filename("arquivo.txt.exe").is_err());
    }

    #[test]
    fn test_extract_txt() {
        let text = extract_upload("natal.txt", "Feliz Natal!".as_bytes(), MAX).unwrap();
        assert_eq!(text, "Feliz Natal!");
    }

    #[test]
    fn test_extract_txt_drops_bom() {
        let text = extract_upload("bom.txt", "\u{feff}Olá".as_bytes(), MAX).unwrap();
        assert_eq!(text, "Olá");
    }

    #[test]
    fn test_non_utf8_txt_is_rejected() {
        let err = extract_upload("latin1.txt", &[0x4f, 0x6c, 0xe1], MAX).unwrap_err();
        assert!(matches!(err, DocumentError::InvalidEncoding));
    }

    #[test]
    fn test_oversized_file_is_rejected() {
        let bytes = vec![b'a'; 11];
        let err = extract_upload("grande.txt", &bytes, 10).unwrap_err();
        assert!(matches!(err, DocumentError::TooLarge { size: 11, max: 10 }));
    }

    #[test]
    fn test_unsupported_type_checked_before_size() {
        let bytes = vec![0u8; 11];
        let err = extract_upload("grande.docx", &bytes, 10).unwrap_err();
        assert!(matches!(err, DocumentError::UnsupportedType(_)));
    }

    #[test]
    fn test_extract_pdf() {
        let text = extract_upload("pedido.pdf", &pdf_bytes(Some("Qual o status do pedido 42?")), MAX).unwrap();
        assert!(text.contains("Qual o status do pedido 42?"));
    }

    #[test]
    fn test_pdf_without_text_maps_to_no_text() {
        let err = extract_upload("escaneado.pdf", &pdf_bytes(None), MAX).unwrap_err();
        assert!(matches!(err, DocumentError::NoText));
    }

    #[test]
    fn test_invalid_pdf_is_rejected() {
        let err = extract_upload("quebrado.pdf", b"not a pdf", MAX).unwrap_err();
        assert!(matches!(err, DocumentError::PdfError(_)));
    }
}
