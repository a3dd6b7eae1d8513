//! End-to-end dashboard flows on a paused tokio clock.

#![cfg(feature = "native")]

use googlia::{
    drive_completions, export_all, FileCandidate, NotificationLog, PipelineConfig, RecordStatus,
    Session, TokioTimer,
};
use std::io::Write;
use std::time::Duration;

fn pdf(name: &str) -> FileCandidate {
    FileCandidate::new(name, "application/pdf", 2048)
}

#[tokio::test(start_paused = true)]
async fn rejected_types_never_become_records() {
    let log = NotificationLog::new();
    let mut session = Session::mock(&PipelineConfig::default());

    session.select(
        vec![
            pdf("a.pdf"),
            FileCandidate::new("b.txt", "text/plain", 10),
            FileCandidate::new("c.gif", "image/gif", 10),
            FileCandidate::new("d.png", "image/png", 10),
            FileCandidate::new("e", "", 10),
        ],
        &log,
    );
    let tasks = session.process(&log);
    drive_completions(&mut session, tasks, &TokioTimer, |_, _, _| {}).await;

    let names: Vec<_> = session
        .pipeline()
        .records()
        .iter()
        .map(|r| r.file_name.as_str())
        .collect();
    assert_eq!(names, vec!["a.pdf", "d.png"]);

    let warnings = log.warnings();
    assert_eq!(warnings.len(), 1);
    for rejected in ["b.txt", "c.gif", "e"] {
        assert!(warnings[0].description.contains(rejected));
    }
}

#[tokio::test(start_paused = true)]
async fn completed_count_tracks_elapsed_time() {
    let log = NotificationLog::new();
    let config = PipelineConfig::default();
    let mut session = Session::mock(&config);

    session.select(vec![pdf("a.pdf"), pdf("b.pdf"), pdf("c.pdf")], &log);
    let tasks = session.process(&log);
    assert_eq!(tasks.len(), 3);
    assert_eq!(session.pipeline().counts().pending, 3);

    let delays: Vec<Duration> = tasks.iter().map(|t| t.delay).collect();
    let start = tokio::time::Instant::now();
    let mut observed = Vec::new();

    drive_completions(&mut session, tasks, &TokioTimer, |session, _, _| {
        let elapsed = start.elapsed();
        let due = delays.iter().filter(|d| **d <= elapsed).count();
        let counts = session.pipeline().counts();
        // Never more completed than timers that have fired
        assert!(counts.completed <= due);
        assert_eq!(counts.completed + counts.pending, 3);
        observed.push(counts.completed);
    })
    .await;

    assert_eq!(observed, vec![1, 2, 3]);
    assert!(session
        .pipeline()
        .records()
        .iter()
        .all(|r| r.status == RecordStatus::Completed));
    assert!(start.elapsed() < config.max_delay + Duration::from_millis(1));
}

#[tokio::test(start_paused = true)]
async fn completions_are_not_repeated() {
    let log = NotificationLog::new();
    let mut session = Session::mock(&PipelineConfig::default());

    session.select(vec![pdf("a.pdf")], &log);
    let tasks = session.process(&log);
    let replay = tasks.clone();

    let mut transitions = 0;
    drive_completions(&mut session, tasks, &TokioTimer, |_, _, _| transitions += 1).await;
    // A duplicate completion is ignored, status stays completed
    drive_completions(&mut session, replay, &TokioTimer, |_, _, _| transitions += 1).await;

    assert_eq!(transitions, 1);
    assert_eq!(session.pipeline().records()[0].status, RecordStatus::Completed);
}

#[tokio::test(start_paused = true)]
async fn export_after_processing() {
    let log = NotificationLog::new();
    let config = PipelineConfig::default();
    let mut session = Session::mock(&config);

    session.select(vec![pdf("a.pdf"), pdf("b.pdf")], &log);
    let tasks = session.process(&log);
    drive_completions(&mut session, tasks, &TokioTimer, |_, _, _| {}).await;

    let summary = export_all(
        session.pipeline().records(),
        &TokioTimer,
        &log,
        config.export_delay,
    )
    .await
    .unwrap();
    assert_eq!(summary.exported, 2);

    let titles: Vec<_> = log.entries().into_iter().map(|n| n.title).collect();
    assert_eq!(
        titles,
        vec![
            "Upload realizado com sucesso!",
            "Preparando download",
            "Download concluído!"
        ]
    );
}

#[test]
fn candidates_from_disk() {
    let dir = tempfile::tempdir().unwrap();

    let pdf_path = dir.path().join("boleto.pdf");
    let mut file = std::fs::File::create(&pdf_path).unwrap();
    file.write_all(b"%PDF-1.4 fake").unwrap();

    let txt_path = dir.path().join("notes.txt");
    std::fs::write(&txt_path, "hello").unwrap();

    let pdf = FileCandidate::from_path(&pdf_path).unwrap();
    assert_eq!(pdf.name, "boleto.pdf");
    assert_eq!(pdf.media_type, "application/pdf");
    assert_eq!(pdf.size, 13);

    let txt = FileCandidate::from_path(&txt_path).unwrap();
    assert_eq!(txt.media_type, "text/plain");
    assert!(txt.kind().is_none());

    assert!(FileCandidate::from_path(&dir.path().join("missing.pdf")).is_err());
}
