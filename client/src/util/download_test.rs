use super::*;
use time::macros::date;

#[test]
fn report_filename_embeds_name_and_date() {
    assert_eq!(
        report_filename(ReportKind::NeedsAnalysis, "Asha Rao", date!(2026 - 10 - 18)),
        "needs_analysis_Asha_Rao_2026-10-18.pdf"
    );
    assert_eq!(
        report_filename(ReportKind::Comprehensive, "Asha Rao", date!(2026 - 01 - 05)),
        "comprehensive_report_Asha_Rao_2026-01-05.pdf"
    );
}

#[test]
fn report_filename_strips_unsafe_characters() {
    assert_eq!(
        report_filename(ReportKind::NeedsAnalysis, "  D'Souza /  Mary ", date!(2026 - 10 - 18)),
        "needs_analysis_DSouza_Mary_2026-10-18.pdf"
    );
}

#[test]
fn report_filename_falls_back_for_blank_name() {
    assert_eq!(
        report_filename(ReportKind::NeedsAnalysis, "   ", date!(2026 - 10 - 18)),
        "needs_analysis_customer_2026-10-18.pdf"
    );
}

#[test]
fn comparison_filename_uses_date_only() {
    assert_eq!(comparison_filename(date!(2026 - 10 - 18)), "product_comparison_2026-10-18.pdf");
}

#[test]
fn save_pdf_is_unavailable_outside_browser() {
    #[cfg(not(feature = "hydrate"))]
    assert_eq!(save_pdf(b"%PDF-1.4", "x.pdf"), Err(DownloadError::Unavailable));
}
