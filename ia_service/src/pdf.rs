use lopdf::Document;

use crate::error::{IaResult, IaServiceError};

/// Extrai texto de PDF usando lopdf (processamento local)
///
/// Páginas sem texto são ignoradas; as demais são unidas por uma linha em
/// branco. PDFs escaneados (só imagem) retornam `IaServiceError::NoText`.
pub fn extract_pdf_text(pdf_bytes: &[u8]) -> IaResult<String> {
    tracing::info!("📄 Extraindo texto do PDF localmente: {} bytes", pdf_bytes.len());

    let document = Document::load_mem(pdf_bytes)
        .map_err(|e| IaServiceError::Pdf(format!("Failed to load PDF: {}", e)))?;

    let mut pages_text: Vec<String> = Vec::new();

    for page_num in document.get_pages().keys() {
        match document.extract_text(&[*page_num]) {
            Ok(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    pages_text.push(trimmed.to_string());
                }
            }
            Err(e) => {
                tracing::warn!("⚠️ Falha ao extrair texto da página {}: {}", page_num, e);
            }
        }
    }

    if pages_text.is_empty() {
        tracing::warn!("⚠️ Nenhum texto extraído do PDF (pode ser PDF de imagens/escaneado)");
        return Err(IaServiceError::NoText);
    }

    let extracted_text = pages_text.join("\n\n");
    tracing::info!("✅ Texto extraído do PDF: {} caracteres", extracted_text.chars().count());

    Ok(extracted_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// Monta um PDF de uma página com as operações de conteúdo informadas
    fn build_pdf(operations: Vec<Operation>) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
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
    fn test_extracts_text_from_simple_pdf() {
        let bytes = build_pdf(vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 24.into()]),
            Operation::new("Td", vec![100.into(), 600.into()]),
            Operation::new("Tj", vec![Object::string_literal("Hello World!")]),
            Operation::new("ET", vec![]),
        ]);

        let text = extract_pdf_text(&bytes).unwrap();
        assert!(text.contains("Hello World!"));
    }

    #[test]
    fn test_pdf_without_text_is_rejected() {
        let bytes = build_pdf(vec![]);

        let err = extract_pdf_text(&bytes).unwrap_err();
        assert!(matches!(err, IaServiceError::NoText));
    }

    #[test]
    fn test_garbage_bytes_are_pdf_error() {
        let err = extract_pdf_text(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, IaServiceError::Pdf(_)));
    }
}
