//! Exporting straight from the persisted archive, the review-side flow.

mod common;

use common::{TestResult, sample_record};
use rackcheck::{
    ChecklistStats, CompletedStore, ExportFormat, TicketId, export_file_name, export_ticket,
    render_text, build_report_lines,
};

#[test]
fn archived_ticket_exports_identically_to_the_live_record() -> TestResult {
    let dir = tempfile::tempdir()?;
    let store = CompletedStore::new(dir.path().join("completed_checklists.json"));
    let id = TicketId::new("CLAR-411");
    store.insert(id.clone(), sample_record())?;

    let live = export_ticket(&sample_record(), ExportFormat::Pdf)?;
    let archived = export_ticket(&store.get(&id).unwrap(), ExportFormat::Pdf)?;
    assert_eq!(live, archived);
    Ok(())
}

#[test]
fn partial_archive_entries_export_with_defaults() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("completed_checklists.json");
    // A hand-written archive entry with most fields missing, as an older
    // version of the tool could have produced.
    std::fs::write(&path, r#"{"CLAR-354": {"agencia": "Agência Norte"}}"#)?;

    let store = CompletedStore::new(&path);
    let record = store.get(&TicketId::new("CLAR-354")).unwrap();
    let text = render_text(&build_report_lines(&record));
    assert!(text.contains("Agência: Agência Norte"));
    assert!(text.contains("Rack está organizado: Não"));
    Ok(())
}

#[test]
fn stats_aggregate_the_sample_archive() -> TestResult {
    let dir = tempfile::tempdir()?;
    let store = CompletedStore::new(dir.path().join("completed_checklists.json"));
    store.insert(TicketId::new("CLAR-411"), sample_record())?;
    store.insert(TicketId::new("CLAR-379"), sample_record())?;

    let stats = ChecklistStats::from_tickets(&store.load());
    assert_eq!(stats.total_tickets, 2);
    assert_eq!(stats.total_racks, 4);
    assert_eq!(stats.tickets_by_location.get("São Paulo/SP"), Some(&2));
    assert_eq!(stats.rack_status.bom_estado.sim, 2);
    assert_eq!(stats.rack_status.bom_estado.nao, 2);
    Ok(())
}

#[test]
fn export_file_names_follow_the_download_convention() {
    let id = TicketId::new("clar-411");
    assert_eq!(export_file_name(&id, ExportFormat::Docx, None), "Checklist_CLAR-411.docx");

    let date = chrono::NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
    assert_eq!(
        export_file_name(&id, ExportFormat::Pdf, Some(date)),
        "Checklist_CLAR-411_20260807.pdf"
    );
}
