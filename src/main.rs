use rangekit::{init_logging, ChartStore};

fn main() -> anyhow::Result<()> {
    init_logging()?;

    // Optional store path argument; falls back to the platform default.
    let path = match std::env::args().nth(1) {
        Some(arg) => arg.into(),
        None => ChartStore::default_path()?,
    };

    let store = ChartStore::load(&path)?;
    tracing::info!(path = %store.path().display(), "opened chart store");

    if store.charts().is_empty() {
        println!("No charts saved yet.");
        return Ok(());
    }

    for chart in store.charts() {
        println!(
            "{}  {}x{}  {} button(s)  [{}]",
            chart.name,
            chart.canvas_width,
            chart.canvas_height,
            chart.buttons.len(),
            chart.id
        );
    }

    Ok(())
}
