//! Parsing of `--rename OLD=NEW` arguments.

use std::collections::BTreeMap;

use anyhow::{anyhow, bail};

/// Parses `OLD=NEW` pairs into a rename map.
///
/// Rejects malformed pairs, empty sides, and duplicate old ids (two
/// renames for one group would be order-dependent).
pub fn parse_renames(pairs: &[String]) -> anyhow::Result<BTreeMap<String, String>> {
    let mut renames = BTreeMap::new();
    for pair in pairs {
        let (old, new) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("invalid rename {pair:?}: expected OLD=NEW"))?;
        let (old, new) = (old.trim(), new.trim());
        if old.is_empty() || new.is_empty() {
            bail!("invalid rename {pair:?}: both sides must be non-empty");
        }
        if renames.insert(old.to_string(), new.to_string()).is_some() {
            bail!("duplicate rename for {old:?}");
        }
    }
    Ok(renames)
}
