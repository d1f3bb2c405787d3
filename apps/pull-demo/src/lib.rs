pub mod app;

pub use app::{run, DemoOptions, DemoReport};

/// Shared entry point for the binary.
pub fn entry_point(options: &DemoOptions) -> anyhow::Result<()> {
    let report = run(options)?;
    for line in &report.frames {
        println!("{line}");
    }
    println!();
    println!(
        "reloads: {}, feed items: {}",
        report.reloads,
        report.feed.len()
    );
    Ok(())
}
