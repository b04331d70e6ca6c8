use site_core::sequence::{
    chunked_sequence, hex_to_rgba, highlight_map, tf_color_hex, tf_color_rgba, tf_hash,
    CHUNK_SIZE, MOTIFS, SEQUENCE, TF_COLORS,
};

#[test]
fn sequence_is_200_bases_of_acgt() {
    assert_eq!(SEQUENCE.sequence.len(), 200);
    assert!(SEQUENCE
        .sequence
        .chars()
        .all(|c| matches!(c, 'A' | 'C' | 'G' | 'T')));
    assert_eq!(SEQUENCE.cell_type, "HepG2");
    assert_eq!(SEQUENCE.category, "Enhancer");
}

#[test]
fn chunks_are_rows_of_ten_with_one_based_labels() {
    let chunks = chunked_sequence();
    assert_eq!(chunks.len(), 20);
    for (i, chunk) in chunks.iter().enumerate() {
        assert_eq!(chunk.label, i * CHUNK_SIZE + 1);
        assert_eq!(chunk.bases.len(), CHUNK_SIZE);
    }
    assert_eq!(chunks[0].label, 1);
    assert_eq!(chunks[19].label, 191);
}

#[test]
fn overlapping_motifs_resolve_last_wins() {
    let map = highlight_map();
    // ARNT::HIF1A covers 37..45 but HIF1A (36..46) comes later in the table.
    assert_eq!(map[&37].motif, "HIF1A");
    assert_eq!(map[&36].motif, "HIF1A");
    // The KLF cluster at 188 ends with MAZ.
    assert_eq!(map[&188].motif, "MAZ");
    // 199 is covered by CTCFL and later KLF14.
    assert_eq!(map[&199].motif, "KLF14");
    assert!(!map.contains_key(&0));
}

#[test]
fn motif_spans_may_overhang_the_sequence_end() {
    // CTCFL ends at 205 on a 200nt sequence; chunking must ignore the
    // overhang without panicking.
    assert!(MOTIFS.iter().any(|m| m.end > SEQUENCE.sequence.len()));
    let chunks = chunked_sequence();
    let last = &chunks[19];
    assert!(last.bases.iter().any(|b| b.highlight.is_some()));
}

#[test]
fn tf_colors_are_stable_and_in_palette() {
    for motif in MOTIFS {
        let hex = tf_color_hex(motif.name);
        assert!(TF_COLORS.contains(&hex));
        assert_eq!(hex, tf_color_hex(motif.name));
    }
    assert_eq!(tf_hash(""), 0);
    assert_eq!(tf_hash("GFI1"), tf_hash("GFI1"));
}

#[test]
fn hex_to_rgba_formats_channels() {
    assert_eq!(hex_to_rgba("#dc2626", 0.4), "rgba(220, 38, 38, 0.4)");
    assert_eq!(hex_to_rgba("#000000", 1.0), "rgba(0, 0, 0, 1)");
    // Malformed input degrades to zeroed channels rather than panicking.
    assert_eq!(hex_to_rgba("#zzzzzz", 0.5), "rgba(0, 0, 0, 0.5)");
}

#[test]
fn highlight_colors_are_muted_rgba() {
    let rgba = tf_color_rgba("HIF1A");
    assert!(rgba.starts_with("rgba("));
    assert!(rgba.ends_with("0.4)"));
}
