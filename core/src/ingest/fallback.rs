//! Fixed sample records served when the sheet cannot be loaded.

use crate::models::PropertyRecord;

/// Bump when the sample set changes.
pub const FALLBACK_VERSION: u32 = 1;

const CONTRACTOR_INSPECTION: &str = "יוסי מזרחי - מנהל מח' פיקוח על הבניה - לא פעיל";
const LICENSING_COMMITTEE: &str = "ועדת רשות רישוי לתכנון ולבניה";
const FORM_4: &str = "הפקת טופס 4";
const RAMAT_GAN: &str = "רמת-גן";

/// The three sample records, in display order.
pub fn fallback_records() -> Vec<PropertyRecord> {
    vec![
        PropertyRecord {
            id: "2014657".into(),
            address: "החילזון 12".into(),
            city: RAMAT_GAN.into(),
            street_code: "409".into(),
            street_name: "החילזון".into(),
            house_number: "12".into(),
            entrance: "0".into(),
            block: "6109".into(),
            parcel: "365".into(),
            event: FORM_4.into(),
            event_date: "1/5/2016".into(),
            main_usage: "משרדים + מסחרי".into(),
            request_description: "שינויים".into(),
            requester_details: "הראל חברה לביטוח בע\"".into(),
            main_area: 5.0,
            contractor: CONTRACTOR_INSPECTION.into(),
            days_from_submission: 498.0,
            last_committee: LICENSING_COMMITTEE.into(),
            last_meeting: "2014031".into(),
            permit_number: "2015001".into(),
            holder: "לא ידוע".into(),
            latitude: 31.866029,
            longitude: 34.742683,
            ..Default::default()
        },
        PropertyRecord {
            id: "2012212".into(),
            address: "הגולן 5".into(),
            city: RAMAT_GAN.into(),
            street_code: "1657".into(),
            street_name: "הגולן".into(),
            house_number: "5".into(),
            entrance: "0".into(),
            block: "6183".into(),
            parcel: "250".into(),
            event: FORM_4.into(),
            event_date: "1/10/2016".into(),
            main_usage: "מגורים".into(),
            request_description: "תוספת דירה".into(),
            requester_details: "צפורה ורמי דהרי".into(),
            main_area: 84.98,
            service_area: 16.0,
            existing_units: 8.0,
            requested_units: 1.0,
            other_area: 41.0,
            contractor: CONTRACTOR_INSPECTION.into(),
            days_from_submission: 1386.0,
            last_committee: LICENSING_COMMITTEE.into(),
            last_meeting: "2012018".into(),
            permit_number: "2013284".into(),
            holder: "לא ידוע".into(),
            latitude: 31.866576,
            longitude: 34.742778,
            ..Default::default()
        },
        PropertyRecord {
            id: "2012213".into(),
            address: "בן גוריון 20".into(),
            city: RAMAT_GAN.into(),
            street_code: "155".into(),
            street_name: "בן גוריון".into(),
            house_number: "20".into(),
            entrance: "0".into(),
            block: "6183".into(),
            parcel: "251".into(),
            event: FORM_4.into(),
            event_date: "5/5/2016".into(),
            main_usage: "מגורים".into(),
            request_description: "בניה חדשה".into(),
            requester_details: "חברת בניה אלפא".into(),
            main_area: 250.0,
            service_area: 30.0,
            requested_units: 6.0,
            other_area: 80.0,
            height: 20.0,
            contractor: "אבי לוי בניה".into(),
            days_from_submission: 450.0,
            last_committee: LICENSING_COMMITTEE.into(),
            last_meeting: "2012020".into(),
            permit_number: "2014001".into(),
            holder: "חברת בניה אלפא".into(),
            latitude: 31.867,
            longitude: 34.743,
            ..Default::default()
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fallback_shape() {
        let records = fallback_records();
        assert_eq!(records.len(), 3);

        let ids: HashSet<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), 3);
        assert!(records.iter().all(PropertyRecord::has_coordinates));
    }

    #[test]
    fn test_fallback_areas() {
        let areas: Vec<f64> = fallback_records().iter().map(|r| r.main_area).collect();
        assert_eq!(areas, vec![5.0, 84.98, 250.0]);
    }
}
