//! `peek settings` – show or change preferences.

use anyhow::Result;
use peek_core::config::{self, DocViewer, PeekConfig};

fn viewer_name(v: DocViewer) -> &'static str {
    match v {
        DocViewer::Google => "google",
    }
}

pub fn run_settings(mut cfg: PeekConfig, doc_viewer: Option<DocViewer>) -> Result<()> {
    if let Some(viewer) = doc_viewer {
        cfg.doc_viewer = viewer;
        config::save(&cfg)?;
        tracing::info!("doc_viewer set to {}", viewer_name(viewer));
        println!("Saved settings to {}", config::config_path()?.display());
    }

    println!("doc_viewer     = {}", viewer_name(cfg.doc_viewer));
    println!("popup.theme    = {}", cfg.popup.theme);
    println!(
        "popup.delay_ms = {} show / {} hide",
        cfg.popup.show_delay_ms, cfg.popup.hide_delay_ms
    );
    Ok(())
}
