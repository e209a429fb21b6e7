//! NAF consumption datasets, one CSV per perimeter.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;
use serde::{Deserialize, Deserializer};
use tracing::info;

use common::chart_data::typologie_label;
use common::filter_query::{FilterDimension, FilterSet};
use common::perimeter::Perimeter;

/// The fifteen annual NAF periods, column name and display label.
pub const ANNUAL_PERIODS: [(&str, &str); 15] = [
    ("naf09art10", "2009-10"),
    ("naf10art11", "2010-11"),
    ("naf11art12", "2011-12"),
    ("naf12art13", "2012-13"),
    ("naf13art14", "2013-14"),
    ("naf14art15", "2014-15"),
    ("naf15art16", "2015-16"),
    ("naf16art17", "2016-17"),
    ("naf17art18", "2017-18"),
    ("naf18art19", "2018-19"),
    ("naf19art20", "2019-20"),
    ("naf20art21", "2020-21"),
    ("naf21art22", "2021-22"),
    ("naf22art23", "2022-23"),
    ("naf23art24", "2023-24"),
];

/// Index range of the 2011-2021 reference decade within [`ANNUAL_PERIODS`].
const REFERENCE_RANGE: std::ops::Range<usize> = 2..12;
/// Index range of the 2021-2024 ZAN period within [`ANNUAL_PERIODS`].
const ZAN_RANGE: std::ops::Range<usize> = 12..15;

/// Numeric columns are parsed leniently: unparseable or missing values become
/// zero, matching how the source files mix blanks and locale decimals.
fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .and_then(|s| s.trim().replace(',', ".").parse::<f64>().ok())
        .unwrap_or(0.0))
}

fn lenient_opt_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().replace(',', ".").parse::<f64>().ok()))
}

/// One commune of the national NAF consumption file.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct CommuneRecord {
    pub idcom: String,
    pub idcomtxt: String,
    pub iddep: String,
    pub aav2020_typo: String,

    #[serde(deserialize_with = "lenient_f64")]
    pub naf09art24: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub art09hab24: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub art09act24: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub art09mix24: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub art09rou24: f64,

    #[serde(deserialize_with = "lenient_f64")]
    pub naf09art10: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub naf10art11: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub naf11art12: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub naf12art13: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub naf13art14: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub naf14art15: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub naf15art16: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub naf16art17: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub naf17art18: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub naf18art19: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub naf19art20: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub naf20art21: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub naf21art22: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub naf22art23: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub naf23art24: f64,

    #[serde(deserialize_with = "lenient_f64")]
    pub pop15: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub pop21: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub pop1521: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub surfcom2024: f64,

    #[serde(deserialize_with = "lenient_opt_f64")]
    pub latitude: Option<f64>,
    #[serde(deserialize_with = "lenient_opt_f64")]
    pub longitude: Option<f64>,
}

impl CommuneRecord {
    /// Total artificialised surface 2009-2024, hectares (columns are m²).
    pub fn artif_total_ha(&self) -> f64 {
        self.naf09art24 / 10_000.0
    }

    /// Department code, taken from the `iddep` column when present, else the
    /// INSEE code prefix.
    pub fn departement(&self) -> &str {
        if !self.iddep.is_empty() {
            &self.iddep
        } else if self.idcom.len() >= 2 {
            &self.idcom[..2]
        } else {
            &self.idcom
        }
    }

    pub fn typologie(&self) -> &'static str {
        typologie_label(self.aav2020_typo.trim())
    }

    /// Annual consumption values in period order, m².
    pub fn annual(&self) -> [f64; 15] {
        [
            self.naf09art10,
            self.naf10art11,
            self.naf11art12,
            self.naf12art13,
            self.naf13art14,
            self.naf14art15,
            self.naf15art16,
            self.naf16art17,
            self.naf17art18,
            self.naf18art19,
            self.naf19art20,
            self.naf20art21,
            self.naf21art22,
            self.naf22art23,
            self.naf23art24,
        ]
    }

    /// 2011-2021 reference consumption, m².
    pub fn conso_reference(&self) -> f64 {
        self.annual()[REFERENCE_RANGE].iter().sum()
    }

    /// 2021-2024 consumption (the ZAN accounting period), m².
    pub fn conso_recente(&self) -> f64 {
        self.annual()[ZAN_RANGE].iter().sum()
    }

    fn matches(&self, filters: &FilterSet) -> bool {
        filters.matches(FilterDimension::Department, self.departement())
            && filters.matches(FilterDimension::Commune, &self.idcomtxt)
            && filters.matches(FilterDimension::Typology, self.typologie())
    }
}

/// All communes of one perimeter.
#[derive(Debug, Default)]
pub struct Dataset {
    pub records: Vec<CommuneRecord>,
}

impl Dataset {
    pub fn from_records(records: Vec<CommuneRecord>) -> Self {
        Self { records }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("failed to open dataset {}", path.display()))?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: CommuneRecord =
                row.with_context(|| format!("malformed row in {}", path.display()))?;
            records.push(record);
        }
        info!("loaded {} communes from {}", records.len(), path.display());
        Ok(Self { records })
    }

    /// Records matching the filter selection, in file order.
    pub fn filtered(&self, filters: &FilterSet) -> Vec<&CommuneRecord> {
        self.records.iter().filter(|r| r.matches(filters)).collect()
    }
}

/// Both perimeters, loaded once at first use.
#[derive(Debug, Default)]
pub struct Datasets {
    scot: Dataset,
    ccpda: Dataset,
    data_dir: PathBuf,
}

pub const SCOT_FILE: &str = "data_scot_rives_du_rhone.csv";
pub const CCPDA_FILE: &str = "data_cc_porte_dromeardeche.csv";

impl Datasets {
    pub fn load(data_dir: &Path) -> anyhow::Result<Self> {
        Ok(Self {
            scot: Dataset::load(&data_dir.join(SCOT_FILE))?,
            ccpda: Dataset::load(&data_dir.join(CCPDA_FILE))?,
            data_dir: data_dir.to_path_buf(),
        })
    }

    pub fn get(&self, perimeter: Perimeter) -> &Dataset {
        match perimeter {
            Perimeter::Scot => &self.scot,
            Perimeter::Ccpda => &self.ccpda,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

static DATASETS: OnceLock<Datasets> = OnceLock::new();

pub fn data_dir() -> PathBuf {
    PathBuf::from(std::env::var("ZAN_DATA_DIR").unwrap_or_else(|_| "./data".to_string()))
}

/// Loads the datasets on first call. A load failure is returned to the caller
/// and retried on the next call rather than being cached.
pub fn get_datasets() -> anyhow::Result<&'static Datasets> {
    if let Some(datasets) = DATASETS.get() {
        return Ok(datasets);
    }
    let loaded = Datasets::load(&data_dir())?;
    Ok(DATASETS.get_or_init(|| loaded))
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;

    /// Small synthetic perimeter used across the api tests: two departments,
    /// three communes, two typologies.
    pub fn sample_records() -> Vec<CommuneRecord> {
        vec![
            CommuneRecord {
                idcom: "26002".into(),
                idcomtxt: "Albon".into(),
                iddep: "26".into(),
                aav2020_typo: "30".into(),
                naf09art24: 150_000.0,
                art09hab24: 80_000.0,
                art09act24: 40_000.0,
                art09mix24: 10_000.0,
                art09rou24: 20_000.0,
                naf11art12: 10_000.0,
                naf12art13: 10_000.0,
                naf20art21: 10_000.0,
                naf21art22: 5_000.0,
                naf23art24: 5_000.0,
                pop15: 1_900.0,
                pop21: 2_000.0,
                pop1521: 100.0,
                surfcom2024: 20_000_000.0,
                latitude: Some(45.24),
                longitude: Some(4.86),
                ..CommuneRecord::default()
            },
            CommuneRecord {
                idcom: "26009".into(),
                idcomtxt: "Anneyron".into(),
                iddep: "26".into(),
                aav2020_typo: "20".into(),
                naf09art24: 300_000.0,
                art09hab24: 150_000.0,
                art09act24: 100_000.0,
                art09mix24: 20_000.0,
                art09rou24: 30_000.0,
                naf11art12: 30_000.0,
                naf19art20: 10_000.0,
                naf21art22: 20_000.0,
                naf22art23: 10_000.0,
                pop15: 3_800.0,
                pop21: 4_000.0,
                pop1521: 200.0,
                surfcom2024: 35_000_000.0,
                latitude: Some(45.27),
                longitude: Some(4.89),
                ..CommuneRecord::default()
            },
            CommuneRecord {
                idcom: "07040".into(),
                idcomtxt: "Andance".into(),
                iddep: "07".into(),
                aav2020_typo: "20".into(),
                naf09art24: 100_000.0,
                art09hab24: 50_000.0,
                art09act24: 30_000.0,
                art09mix24: 5_000.0,
                art09rou24: 15_000.0,
                naf13art14: 20_000.0,
                naf21art22: 2_000.0,
                pop15: 1_250.0,
                pop21: 1_200.0,
                pop1521: -50.0,
                surfcom2024: 10_000_000.0,
                latitude: None,
                longitude: None,
                ..CommuneRecord::default()
            },
        ]
    }

    pub fn sample_dataset() -> Dataset {
        Dataset::from_records(sample_records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::filter_query::FilterDimension;

    #[test]
    fn lenient_parsing_coerces_bad_values_to_zero() {
        let data = "idcom;idcomtxt;iddep;aav2020_typo;naf09art24;pop21\n\
                    26002;Albon;26;30;n/a;1 234\n\
                    26009;Anneyron;26;20;12,5;4000\n";
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .flexible(true)
            .from_reader(data.as_bytes());
        let records: Vec<CommuneRecord> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(records[0].naf09art24, 0.0);
        assert_eq!(records[0].pop21, 0.0); // thousands separator is not parsed
        assert_eq!(records[1].naf09art24, 12.5); // locale decimal comma
        assert_eq!(records[1].pop21, 4000.0);
    }

    #[test]
    fn departement_falls_back_to_the_insee_prefix() {
        let record = CommuneRecord {
            idcom: "07040".into(),
            ..CommuneRecord::default()
        };
        assert_eq!(record.departement(), "07");
        let record = CommuneRecord {
            idcom: "07040".into(),
            iddep: "07".into(),
            ..CommuneRecord::default()
        };
        assert_eq!(record.departement(), "07");
    }

    #[test]
    fn filtered_applies_all_three_dimensions() {
        let dataset = test_fixtures::sample_dataset();
        assert_eq!(dataset.filtered(&FilterSet::new()).len(), 3);

        let mut filters = FilterSet::new();
        filters.toggle_value(FilterDimension::Department, "26");
        assert_eq!(dataset.filtered(&filters).len(), 2);

        filters.toggle_value(FilterDimension::Typology, "Petites/moyennes aires");
        let rows = dataset.filtered(&filters);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].idcomtxt, "Anneyron");

        filters.toggle_value(FilterDimension::Commune, "Albon");
        assert!(dataset.filtered(&filters).is_empty());
    }

    #[test]
    fn reference_and_recent_windows() {
        let record = &test_fixtures::sample_records()[0];
        // Albon: 10k in 11-12, 10k in 12-13, 10k in 20-21 => reference 30k m²
        assert_eq!(record.conso_reference(), 30_000.0);
        // 5k in 21-22 + 5k in 23-24 => recent 10k m²
        assert_eq!(record.conso_recente(), 10_000.0);
    }
}
