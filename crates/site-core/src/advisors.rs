//! Static advisor registry backing the bio popup.

#[derive(Clone, Copy, Debug)]
pub struct Advisor {
    pub id: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub bio: &'static str,
    pub image: &'static str,
}

pub const ADVISORS: &[Advisor] = &[
    Advisor {
        id: "chen",
        name: "Dr. Mei Chen",
        title: "Regulatory Genomics",
        bio: "Leads enhancer-screening programs spanning massively parallel \
              reporter assays and chromatin profiling in hepatic cell models.",
        image: "assets/advisors/chen.jpg",
    },
    Advisor {
        id: "okafor",
        name: "Dr. Ada Okafor",
        title: "Computational Biology",
        bio: "Builds sequence-to-function models for non-coding DNA and has \
              published extensively on transcription-factor binding grammar.",
        image: "assets/advisors/okafor.jpg",
    },
    Advisor {
        id: "lindqvist",
        name: "Dr. Erik Lindqvist",
        title: "Structural Biology",
        bio: "Works on predicted nucleic-acid structure ensembles and their \
              validation against cryo-EM maps.",
        image: "assets/advisors/lindqvist.jpg",
    },
    Advisor {
        id: "ramos",
        name: "Dr. Lucia Ramos",
        title: "Synthetic Biology",
        bio: "Designs programmable expression switches and dose-response \
              reporter circuits for mammalian systems.",
        image: "assets/advisors/ramos.jpg",
    },
];

pub fn advisor_by_id(id: &str) -> Option<&'static Advisor> {
    ADVISORS.iter().find(|a| a.id == id)
}
