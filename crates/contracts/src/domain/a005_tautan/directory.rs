//! Static directory of external references and internal report links.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkGroup {
    pub title: &'static str,
    pub links: &'static [Link],
}

/// Group with only the links matching a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredGroup {
    pub title: &'static str,
    pub links: Vec<Link>,
}

pub const LINK_GROUPS: &[LinkGroup] = &[
    LinkGroup {
        title: "Referensi Eksternal",
        links: &[
            Link {
                title: "e-Katalog LKPP",
                description: "Sistem informasi katalog elektronik untuk pengadaan barang/jasa pemerintah.",
                url: "https://e-katalog.lkpp.go.id/",
            },
            Link {
                title: "SIRUP LKPP",
                description: "Sistem Informasi Rencana Umum Pengadaan barang/jasa pemerintah.",
                url: "https://sirup.lkpp.go.id/",
            },
            Link {
                title: "KPKNL",
                description: "Kantor Pelayanan Kekayaan Negara dan Lelang, di bawah DJKN.",
                url: "https://www.djkn.kemenkeu.go.id/kpknl-bandung",
            },
            Link {
                title: "SIMDA BMD",
                description: "Sistem Informasi Manajemen Daerah - Barang Milik Daerah dari BPKP.",
                url: "https://www.bpkp.go.id/sakd/konten/310/SIMDA-BMD.bpkp",
            },
            Link {
                title: "JDIH BPK RI",
                description: "Jaringan Dokumentasi dan Informasi Hukum Badan Pemeriksa Keuangan.",
                url: "https://peraturan.bpk.go.id/",
            },
            Link {
                title: "SP4N LAPOR!",
                description: "Layanan Aspirasi dan Pengaduan Online Rakyat untuk pengawasan.",
                url: "https://www.lapor.go.id/",
            },
            Link {
                title: "Sistem e-BMD Jabar",
                description: "Aplikasi pengelolaan Barang Milik Daerah Provinsi Jawa Barat.",
                url: "https://aset.jabarprov.go.id/",
            },
            Link {
                title: "Website BPSDM Jabar",
                description: "Portal resmi Badan Pengembangan Sumber Daya Manusia Jawa Barat.",
                url: "https://bpsdm.jabarprov.go.id/",
            },
        ],
    },
    LinkGroup {
        title: "Laporan & Tugas Internal",
        links: &[
            Link {
                title: "Laporan Denah BPSDM Provinsi Jawa Barat",
                description: "Dokumen spreadsheet untuk laporan denah dan aset BPSDM.",
                url: "https://docs.google.com/spreadsheets/d/1Gs4zNJih6NW2OqZP8XTVH8nDnCZjxKx3KtfqFP-RS6I/edit?gid=1723776320#gid=1723776320",
            },
            Link {
                title: "Form Inventarisasi Barang",
                description: "Formulir online untuk pendataan dan inventarisasi barang.",
                url: "https://bit.ly/Form-Barang",
            },
            Link {
                title: "Form Inventarisasi Bangunan",
                description: "Formulir online untuk pendataan dan inventarisasi bangunan.",
                url: "https://bit.ly/Form-Bangunan",
            },
            Link {
                title: "Drive Foto Aset (Wisma)",
                description: "Kumpulan foto dokumentasi untuk barang dan bangunan di wisma.",
                url: "https://bit.ly/Foto-Wisma",
            },
        ],
    },
];

pub fn total_links() -> usize {
    LINK_GROUPS.iter().map(|g| g.links.len()).sum()
}

/// Case-insensitive match on title or description; groups left empty are dropped.
pub fn filter_groups(term: &str) -> Vec<FilteredGroup> {
    let needle = term.trim().to_lowercase();
    LINK_GROUPS
        .iter()
        .map(|group| FilteredGroup {
            title: group.title,
            links: group
                .links
                .iter()
                .filter(|link| {
                    needle.is_empty()
                        || link.title.to_lowercase().contains(&needle)
                        || link.description.to_lowercase().contains(&needle)
                })
                .copied()
                .collect(),
        })
        .filter(|group| !group.links.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_returns_everything() {
        let groups = filter_groups("  ");
        assert_eq!(groups.len(), LINK_GROUPS.len());
        assert_eq!(
            groups.iter().map(|g| g.links.len()).sum::<usize>(),
            total_links()
        );
    }

    #[test]
    fn test_filter_matches_description_and_drops_empty_groups() {
        let groups = filter_groups("WISMA");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].title, "Laporan & Tugas Internal");
        assert_eq!(groups[0].links[0].title, "Drive Foto Aset (Wisma)");
    }

    #[test]
    fn test_filter_without_match() {
        assert!(filter_groups("tidak-ada-yang-cocok").is_empty());
    }
}
