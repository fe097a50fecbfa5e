use labsight_textract::{is_supported_media_type, media_type_for_extension};

#[test]
fn accepts_images_and_pdf() {
    for content_type in ["image/jpeg", "image/png", "image/tiff", "application/pdf"] {
        assert!(is_supported_media_type(content_type), "{content_type}");
    }
}

#[test]
fn ignores_parameters_and_case() {
    assert!(is_supported_media_type("Application/PDF; name=report.pdf"));
}

#[test]
fn rejects_other_media_types() {
    for content_type in ["text/plain", "image/gif", "application/octet-stream", ""] {
        assert!(!is_supported_media_type(content_type), "{content_type}");
    }
}

#[test]
fn maps_extensions() {
    assert_eq!(media_type_for_extension("JPG"), Some("image/jpeg"));
    assert_eq!(media_type_for_extension("tif"), Some("image/tiff"));
    assert_eq!(media_type_for_extension("pdf"), Some("application/pdf"));
    assert_eq!(media_type_for_extension("docx"), None);
}
