use decision_sheet::{sheet, PDFError};

const FIELD_NAMES: [&str; 5] = [
    "DecisionTopic",
    "AdvStay",
    "DisadvStay",
    "AdvChange",
    "DisadvChange",
];

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[test]
fn build_with_a_logo_produces_a_complete_form() {
    let dir = tempfile::tempdir().expect("can create a temp dir");
    let logo = dir.path().join("logo.png");
    image::RgbaImage::from_pixel(40, 30, image::Rgba([255, 0, 0, 255]))
        .save(&logo)
        .expect("can write a png");

    let output = dir.path().join("sheet.pdf");
    sheet::generate(&output, &logo).expect("build succeeds");

    let bytes = std::fs::read(&output).expect("output file exists");
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(contains(&bytes, b"/Count 1"), "exactly one page");
    assert!(contains(&bytes, b"/AcroForm"));
    for name in FIELD_NAMES {
        assert!(
            contains(&bytes, format!("({name})").as_bytes()),
            "missing field {name}"
        );
    }
    assert!(contains(&bytes, b"(Decision Balance Sheet)"));
}

#[test]
fn missing_logo_is_not_an_error() {
    let dir = tempfile::tempdir().expect("can create a temp dir");
    let output = dir.path().join("sheet.pdf");

    sheet::generate(&output, dir.path().join("missing.png")).expect("build succeeds");

    let bytes = std::fs::read(&output).expect("output file exists");
    for name in FIELD_NAMES {
        assert!(
            contains(&bytes, format!("({name})").as_bytes()),
            "missing field {name}"
        );
    }
}

#[test]
fn unwritable_destination_surfaces_the_error() {
    let dir = tempfile::tempdir().expect("can create a temp dir");
    let output = dir.path().join("no-such-dir").join("sheet.pdf");

    let error = sheet::generate(&output, "missing.png").expect_err("build fails");
    assert!(matches!(error, PDFError::OutputWrite(_)));
}
