// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Plain-text rendering of search results.
//!
//! Renders the leading `max_clusters` clusters of a list, one block each:
//!
//! ```text
//! [GHOST 1] energy=2 size=2
//!    examples: 1, 2
//!    spectra: 1:(1, 1), 2:(0, 2)
//!
//! ```
//!
//! The examples line shows at most [`PREVIEW_LIMIT`] members, followed by a
//! `... (+N more)` line when the cluster is larger.

use crate::cluster::{ClusterRecord, EnergyCluster, IsoformCluster};
use crate::constants::PREVIEW_LIMIT;
use crate::linear::LinearCluster;
use std::fmt::{self, Write};

fn write_members<W: Write, C: ClusterRecord>(out: &mut W, cluster: &C) -> fmt::Result {
    let numbers = cluster.numbers();
    write!(out, "   examples: ")?;
    for (i, n) in numbers.iter().take(PREVIEW_LIMIT).enumerate() {
        if i > 0 {
            write!(out, ", ")?;
        }
        write!(out, "{}", n)?;
    }
    writeln!(out)?;

    let examples = cluster.examples();
    if !examples.is_empty() {
        write!(out, "   spectra: ")?;
        for (i, example) in examples.iter().enumerate() {
            if i > 0 {
                write!(out, ", ")?;
            }
            write!(out, "{}:{}", example.number, example.spectrum)?;
        }
        writeln!(out)?;
    }

    if numbers.len() > PREVIEW_LIMIT {
        writeln!(out, "   ... (+{} more)", numbers.len() - PREVIEW_LIMIT)?;
    }
    writeln!(out)
}

fn write_coefficients<W: Write>(out: &mut W, coefficients: &[i64]) -> fmt::Result {
    write!(out, "(")?;
    for (i, c) in coefficients.iter().enumerate() {
        if i > 0 {
            write!(out, ", ")?;
        }
        write!(out, "{}", c)?;
    }
    write!(out, ")")
}

pub fn render_isoforms<W: Write>(
    out: &mut W,
    clusters: &[IsoformCluster],
    max_clusters: usize,
) -> fmt::Result {
    if clusters.is_empty() {
        return writeln!(out, "No isoforms found.");
    }
    for (idx, cluster) in clusters.iter().take(max_clusters).enumerate() {
        writeln!(
            out,
            "[ISO {}] vector={} size={}",
            idx + 1,
            cluster.spectrum,
            cluster.size
        )?;
        write_members(out, cluster)?;
    }
    Ok(())
}

pub fn render_ghosts<W: Write>(
    out: &mut W,
    clusters: &[EnergyCluster],
    max_clusters: usize,
) -> fmt::Result {
    if clusters.is_empty() {
        return writeln!(out, "No ghost energy clusters found.");
    }
    for (idx, cluster) in clusters.iter().take(max_clusters).enumerate() {
        writeln!(
            out,
            "[GHOST {}] energy={} size={}",
            idx + 1,
            cluster.energy,
            cluster.size
        )?;
        write_members(out, cluster)?;
    }
    Ok(())
}

pub fn render_linear<W: Write>(
    out: &mut W,
    clusters: &[LinearCluster],
    max_clusters: usize,
) -> fmt::Result {
    if clusters.is_empty() {
        return writeln!(out, "No linear invariants found.");
    }
    for (idx, cluster) in clusters.iter().take(max_clusters).enumerate() {
        write!(out, "[LINEAR {}] coeffs=", idx + 1)?;
        write_coefficients(out, &cluster.coefficients)?;
        writeln!(out, " value={} size={}", cluster.value, cluster.size)?;
        write_members(out, cluster)?;
    }
    Ok(())
}

pub fn isoforms_to_string(clusters: &[IsoformCluster], max_clusters: usize) -> String {
    let mut out = String::new();
    // Writing to a String never fails.
    let _ = render_isoforms(&mut out, clusters, max_clusters);
    out
}

pub fn ghosts_to_string(clusters: &[EnergyCluster], max_clusters: usize) -> String {
    let mut out = String::new();
    let _ = render_ghosts(&mut out, clusters, max_clusters);
    out
}

pub fn linear_to_string(clusters: &[LinearCluster], max_clusters: usize) -> String {
    let mut out = String::new();
    let _ = render_linear(&mut out, clusters, max_clusters);
    out
}
