//! Integration test: dataset on disk, local HTTP server, stub resolver, full face run.

mod common;

use herofaces_core::config::{HeroFacesConfig, DEFAULT_USER_AGENT};
use herofaces_core::fetch::{CurlFetcher, FetchError, Fetcher};
use herofaces_core::pipeline;
use herofaces_core::resolver::{ResolveError, UrlResolver};
use herofaces_core::worker::JobOutcome;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tempfile::tempdir;

fn png(w: u32, h: u32) -> Vec<u8> {
    let img = RgbaImage::from_fn(w, h, |x, y| Rgba([x as u8 * 40, y as u8 * 40, 7, 255]));
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut out, ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

/// Maps wiki filenames to fixed answers and records every batch it receives.
struct MapResolver {
    answers: HashMap<String, String>,
    batches: Mutex<Vec<Vec<String>>>,
}

impl UrlResolver for MapResolver {
    fn resolve(&self, names: &[String]) -> Result<Vec<Option<String>>, ResolveError> {
        self.batches.lock().unwrap().push(names.to_vec());
        Ok(names.iter().map(|n| self.answers.get(n).cloned()).collect())
    }
}

fn write_dataset(data_dir: &Path, units: &str, usen: &str) {
    std::fs::create_dir_all(data_dir.join("content")).unwrap();
    std::fs::create_dir_all(data_dir.join("languages")).unwrap();
    std::fs::write(data_dir.join("content/fullunits.json"), units).unwrap();
    std::fs::write(
        data_dir.join("languages/fulllanguages.json"),
        format!(r#"{{"USEN": {usen}}}"#),
    )
    .unwrap();
}

fn fetcher() -> CurlFetcher {
    CurlFetcher::new(DEFAULT_USER_AGENT, Duration::from_secs(10))
}

#[test]
fn curl_fetcher_sends_user_agent_and_reports_status() {
    let mut routes = HashMap::new();
    routes.insert("/face.png".to_string(), png(2, 2));
    let server = common::image_server::start(routes);

    let body = fetcher().get(&server.url("face.png")).unwrap();
    assert_eq!(body, png(2, 2));
    assert_eq!(server.user_agents(), vec![DEFAULT_USER_AGENT.to_string()]);

    let err = fetcher().get(&server.url("missing.png")).unwrap_err();
    assert!(matches!(err, FetchError::Http(404)), "{err}");
}

#[test]
fn face_run_downloads_missing_assets_then_is_up_to_date() {
    let mut routes = HashMap::new();
    routes.insert("/marth.png".to_string(), png(4, 4));
    routes.insert("/marth_resplendent.png".to_string(), png(5, 5));
    routes.insert("/veronica.png".to_string(), png(3, 3));
    let server = common::image_server::start(routes);

    let root = tempdir().unwrap();
    let data_dir = root.path().join("data");
    write_dataset(
        &data_dir,
        r#"{
            "PID_Marth": {},
            "PID_Lost": {},
            "EID_Generic": {},
            "EID_Veronica": {"boss": true}
        }"#,
        r#"{
            "MPID_Marth": "Marth",
            "MPID_HONOR_Marth": "Hero-King",
            "MPID_VOICE_MarthEX01": "voice",
            "MPID_Lost": "Lost",
            "MEID_Generic": "Generic",
            "MEID_Veronica": "Veronica"
        }"#,
    );

    let mut answers = HashMap::new();
    answers.insert("Marth: Hero-King_Face_FC.webp".to_string(), server.url("marth.png"));
    answers.insert(
        "Marth: Hero-King_Resplendent_Face_FC.webp".to_string(),
        server.url("marth_resplendent.png"),
    );
    answers.insert("Veronica_Face_FC.webp".to_string(), server.url("veronica.png"));
    let resolver = MapResolver {
        answers,
        batches: Mutex::new(Vec::new()),
    };

    let mut cfg = HeroFacesConfig::default();
    cfg.data_dir = data_dir.clone();

    let report = pipeline::run_faces(&cfg, &resolver, &fetcher()).unwrap();
    assert_eq!(report.saved(), 3);
    assert_eq!(report.not_found(), 1);
    assert_eq!(report.failed(), 0);

    let lost = report
        .outcomes
        .iter()
        .find(|(j, _)| j.item_id == "PID_Lost")
        .unwrap();
    assert_eq!(lost.1, JobOutcome::NotFound);

    let faces = data_dir.join("img/faces");
    for (file, size) in [
        ("Marth Hero-King.webp", 4),
        ("Marth Hero-King_Resplendent.webp", 5),
        ("Veronica.webp", 3),
    ] {
        let img = image::open(faces.join(file)).unwrap();
        assert_eq!((img.width(), img.height()), (size, size), "{file}");
    }
    assert!(!faces.join("Generic.webp").exists());
    assert_eq!(server.request_count(), 3);

    // Second run: only the unresolved asset is planned again.
    let again = pipeline::run_faces(&cfg, &resolver, &fetcher()).unwrap();
    assert_eq!(again.outcomes.len(), 1);
    assert_eq!(again.outcomes[0].0.item_id, "PID_Lost");
    assert_eq!(server.request_count(), 3);
}

#[test]
fn large_plans_are_resolved_in_batches_of_fifty() {
    let root = tempdir().unwrap();
    let data_dir = root.path().join("data");
    let units: Vec<String> = (0..120).map(|i| format!(r#""PID_U{i:03}": {{}}"#)).collect();
    write_dataset(&data_dir, &format!("{{{}}}", units.join(",")), "{}");

    let resolver = MapResolver {
        answers: HashMap::new(),
        batches: Mutex::new(Vec::new()),
    };
    let mut cfg = HeroFacesConfig::default();
    cfg.data_dir = data_dir;

    let report = pipeline::run_faces(&cfg, &resolver, &fetcher()).unwrap();
    assert_eq!(report.not_found(), 120);

    let batches = resolver.batches.lock().unwrap();
    let sizes: Vec<usize> = batches.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![50, 50, 20]);
    let flat: Vec<&String> = batches.iter().flatten().collect();
    assert_eq!(flat.first().unwrap().as_str(), "PID_U000_Face_FC.webp");
    assert_eq!(flat.last().unwrap().as_str(), "PID_U119_Face_FC.webp");
}
