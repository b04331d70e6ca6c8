//! Enhancer sequence display model: the fixed 200nt sequence, its motif
//! hits, and the chunked/highlighted layout the web frontend renders.

use fnv::FnvHashMap;

pub const CHUNK_SIZE: usize = 10;

#[derive(Clone, Copy, Debug)]
pub struct SequenceRecord {
    pub id: &'static str,
    pub sequence: &'static str,
    pub cell_type: &'static str,
    pub category: &'static str,
}

pub const SEQUENCE: SequenceRecord = SequenceRecord {
    id: "pELS_HepG2_dnase_high_-1_10000796",
    sequence: "GAATAGCTTCCAATCCTCACGGTGTGCTGTGTCTGGGCACGTTGAACAGAAAATCCTTGTCAACAACCTTGATCAAACATCCAAGCAGGGACGCGTCAGGAGCAATCTGATTGTTTTTGCATGTGGGAGGCGTACATTTCCCCCTGGCTGCCTACCTGCTTTGATTGGCTCGGGAGAGTGGTGTAGCTGGGGAGGGGGCG",
    cell_type: "HepG2",
    category: "Enhancer",
};

#[derive(Clone, Copy, Debug)]
pub struct Motif {
    pub name: &'static str,
    pub start: usize,
    pub end: usize,
}

/// Motif hits for this sequence, half-open [start, end) in 0-based positions.
pub const MOTIFS: &[Motif] = &[
    Motif { name: "ARNT::HIF1A", start: 37, end: 45 },
    Motif { name: "CTCFL", start: 191, end: 205 },
    Motif { name: "DUXA", start: 160, end: 173 },
    Motif { name: "ETV2::ONECUT2", start: 149, end: 166 },
    Motif { name: "GFI1", start: 156, end: 168 },
    Motif { name: "HIF1A", start: 36, end: 46 },
    Motif { name: "INSM1", start: 137, end: 149 },
    Motif { name: "KLF1", start: 188, end: 197 },
    Motif { name: "KLF10", start: 188, end: 199 },
    Motif { name: "KLF12", start: 188, end: 197 },
    Motif { name: "KLF14", start: 188, end: 202 },
    Motif { name: "KLF17", start: 168, end: 183 },
    Motif { name: "KLF5", start: 188, end: 198 },
    Motif { name: "MAZ", start: 188, end: 199 },
    Motif { name: "MEIS1", start: 57, end: 64 },
];

pub const TF_COLORS: &[&str] = &[
    "#dc2626", "#2563eb", "#059669", "#d97706", "#7c3aed",
    "#db2777", "#0891b2", "#65a30d", "#ea580c", "#6366f1",
    "#be123c", "#0d9488", "#ca8a04", "#4f46e5", "#16a34a",
    "#e11d48", "#0284c7", "#84cc16", "#c026d3", "#14b8a6",
    "#f59e0b", "#8b5cf6", "#ef4444", "#06b6d4", "#a855f7",
    "#10b981", "#f97316", "#3b82f6", "#ec4899", "#22c55e",
];

/// 32-bit string hash (h = h*31 + byte with i32 wraparound), matching the
/// palette assignment the workbench uses so colors stay stable per factor.
pub fn tf_hash(name: &str) -> i32 {
    let mut hash: i32 = 0;
    for byte in name.bytes() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(byte as i32);
    }
    hash
}

pub fn tf_color_hex(name: &str) -> &'static str {
    TF_COLORS[tf_hash(name).unsigned_abs() as usize % TF_COLORS.len()]
}

/// Muted rgba used for highlight backgrounds.
pub fn tf_color_rgba(name: &str) -> String {
    hex_to_rgba(tf_color_hex(name), 0.4)
}

pub fn hex_to_rgba(hex: &str, alpha: f32) -> String {
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };
    format!(
        "rgba({}, {}, {}, {})",
        channel(1..3),
        channel(3..5),
        channel(5..7),
        alpha
    )
}

#[derive(Clone, Debug)]
pub struct Highlight {
    pub motif: &'static str,
    pub color: String,
}

/// Position -> highlight map over the sequence. Overlapping motifs resolve
/// last-wins in table order.
pub fn highlight_map() -> FnvHashMap<usize, Highlight> {
    let mut map = FnvHashMap::default();
    for motif in MOTIFS {
        let color = tf_color_rgba(motif.name);
        for pos in motif.start..motif.end {
            map.insert(
                pos,
                Highlight {
                    motif: motif.name,
                    color: color.clone(),
                },
            );
        }
    }
    map
}

#[derive(Clone, Debug)]
pub struct BaseCell {
    pub base: char,
    pub highlight: Option<Highlight>,
}

#[derive(Clone, Debug)]
pub struct SeqChunk {
    /// 1-based position of the first base in this row.
    pub label: usize,
    pub bases: Vec<BaseCell>,
}

/// The sequence split into rows of ten bases with highlights resolved.
pub fn chunked_sequence() -> Vec<SeqChunk> {
    let highlights = highlight_map();
    let seq: Vec<char> = SEQUENCE.sequence.chars().collect();
    seq.chunks(CHUNK_SIZE)
        .enumerate()
        .map(|(i, chunk)| SeqChunk {
            label: i * CHUNK_SIZE + 1,
            bases: chunk
                .iter()
                .enumerate()
                .map(|(j, &base)| BaseCell {
                    base,
                    highlight: highlights.get(&(i * CHUNK_SIZE + j)).cloned(),
                })
                .collect(),
        })
        .collect()
}
