use crate::types::FlattenCfg;
use anyhow::{Context, Result};
use std::path::Path;

/// Leser inn utflatings-cfg fra disk (JSON).
/// Hvis filen ikke finnes, returneres default-cfg.
pub fn load_cfg(path: &str) -> Result<FlattenCfg> {
    if Path::new(path).exists() {
        let contents =
            std::fs::read_to_string(path).with_context(|| format!("klarte ikke å lese {path}"))?;
        let cfg: FlattenCfg =
            serde_json::from_str(&contents).with_context(|| format!("ugyldig cfg i {path}"))?;
        log::info!(
            "cfg lastet fra {} (repeat_mode={:?}, max_laps={})",
            path,
            cfg.repeat_mode,
            cfg.max_laps
        );
        Ok(cfg)
    } else {
        log::warn!("fant ikke cfg på {}, bruker default", path);
        Ok(FlattenCfg::default())
    }
}

/// Lagrer cfg til disk som JSON (pretty-print).
pub fn save_cfg(cfg: &FlattenCfg, path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(cfg)?;
    std::fs::write(path, &json).with_context(|| format!("klarte ikke å skrive {path}"))?;
    log::info!("cfg lagret til {}", path);
    Ok(())
}
