use export::storage::ExportStore;
use model::Fix;
use survey::builder::CaptureConfig;
use survey::session::{self, CaptureMode};

#[tokio::main]
async fn main() {
    env_logger::init();

    let session = session::spawn(CaptureConfig::default());
    session.set_mode(CaptureMode::Walking).await.unwrap();

    // walk a ~111m square near the equator
    for (latitude, longitude) in
        [(0.0, 0.0), (0.0, 0.001), (0.001, 0.001), (0.001, 0.0)]
    {
        let fix = Fix::new(latitude, longitude)
            .with_accuracy(2.5)
            .with_altitude(14.0);
        session.deliver_fix(fix).await.unwrap();
    }

    let area = session.finish().await.unwrap();
    let json = serde_json::to_string_pretty(&area).unwrap();
    println!("area: {}", json);

    let points = session.snapshot().await.unwrap();
    let last_fix = session.last_fix().await.unwrap();

    let store = ExportStore::new("exports");
    let csv_path = store
        .export_csv(&points, &area, last_fix.as_ref())
        .unwrap();
    println!("csv: {}", csv_path.display());
    let geojson_path = store.export_geo_json(&points).unwrap();
    println!("geojson: {}", geojson_path.display());
    let saved_path = store.save_named("equator square", &points).unwrap();
    println!("saved: {}", saved_path.display());
}
