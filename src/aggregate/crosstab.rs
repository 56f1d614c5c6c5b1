//! District <-> province cross-tabulation.

use crate::aggregate::{percentage, province_counts, ranked, top_entry};
use crate::record::Field;
use crate::store::{RecordStore, Subset};

/// Most-used province of one district
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictPreference {
    pub district: String,
    pub province: String,
    /// Roads in the district named after `province`
    pub count: usize,
    /// Roads in the district
    pub total: usize,
}

impl DistrictPreference {
    pub fn percentage(&self) -> Option<f64> {
        percentage(self.count, self.total)
    }
}

/// District where one province is used the most
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvinceConcentration {
    pub province: String,
    pub district: String,
    /// Roads named after the province in `district`
    pub count: usize,
    /// Roads named after the province overall
    pub total: usize,
}

impl ProvinceConcentration {
    pub fn percentage(&self) -> Option<f64> {
        percentage(self.count, self.total)
    }
}

/// Top province for every district, districts sorted by name.
///
/// Ties between provinces go to the one first seen in that district.
pub fn district_preferences(store: &RecordStore) -> Vec<DistrictPreference> {
    let table = store.cross_group(Subset::Deduplicated, Field::District, Field::Province);

    let mut preferences: Vec<DistrictPreference> = table
        .iter()
        .filter_map(|(district, provinces)| {
            let (province, count) = top_entry(provinces)?;
            Some(DistrictPreference {
                district: district.clone(),
                province: province.to_string(),
                count,
                total: provinces.values().sum(),
            })
        })
        .collect();

    preferences.sort_by(|a, b| a.district.cmp(&b.district));
    preferences
}

/// Most concentrated district for each of the `top_n` most used provinces
pub fn province_concentrations(store: &RecordStore, top_n: usize) -> Vec<ProvinceConcentration> {
    let table = store.cross_group(Subset::Deduplicated, Field::Province, Field::District);
    let provinces = province_counts(store);

    ranked(&provinces)
        .into_iter()
        .take(top_n)
        .filter_map(|(province, _)| {
            let districts = table.get(province)?;
            let (district, count) = top_entry(districts)?;
            Some(ProvinceConcentration {
                province: province.to_string(),
                district: district.to_string(),
                count,
                total: districts.values().sum(),
            })
        })
        .collect()
}
