// File: crates/scatter-core/tests/common/mod.rs
// Purpose: Shared fixtures for the integration tests.

#![allow(dead_code)]

use scatter_core::source::{normalize, parse_json, InvalidRecordPolicy};
use scatter_core::RaceRecord;

/// The two-rider scenario: "A" clean in 1994, "B" with an admitted allegation in 1996.
pub const SCENARIO_JSON: &[u8] = br#"[
    {"Name":"A","Nationality":"ITA","Year":1994,"Time":"36:55","Place":1,"Seconds":2215,"Doping":""},
    {"Name":"B","Nationality":"FRA","Year":1996,"Time":"38:01","Place":2,"Seconds":2281,"Doping":"Admitted"}
]"#;

pub fn records_from(json: &[u8]) -> Vec<RaceRecord> {
    let raw = parse_json(json).expect("fixture is valid JSON");
    normalize(raw, InvalidRecordPolicy::Abort).expect("fixture rows are valid")
}

pub fn scenario() -> Vec<RaceRecord> {
    records_from(SCENARIO_JSON)
}

/// A handful of rows shaped like the public dataset.
pub fn sample() -> Vec<RaceRecord> {
    records_from(
        br#"[
            {"Time":"36:50","Place":1,"Seconds":2210,"Name":"Marco Pantani","Year":1995,"Nationality":"ITA","Doping":"Alleged drug use during 1995 due to high hematocrit levels","URL":"","Doping_URL":""},
            {"Time":"36:55","Place":2,"Seconds":2215,"Name":"Marco Pantani","Year":1997,"Nationality":"ITA","Doping":"Alleged drug use during 1997 due to high hermatocrit levels","URL":"","Doping_URL":""},
            {"Time":"37:15","Place":3,"Seconds":2235,"Name":"Marco Pantani","Year":1994,"Nationality":"ITA","Doping":"Alleged drug use during 1994 due to high hermatocrit levels","URL":"","Doping_URL":""},
            {"Time":"38:14","Place":15,"Seconds":2294,"Name":"Andy Schleck","Year":2011,"Nationality":"LUX","Doping":"","URL":"","Doping_URL":""},
            {"Time":"39:15","Place":33,"Seconds":2355,"Name":"Miguel Indurain","Year":1995,"Nationality":"ESP","Doping":"","URL":"","Doping_URL":""},
            {"Time":"39:50","Place":35,"Seconds":2390,"Name":"Nairo Quintana","Year":2015,"Nationality":"COL","Doping":"","URL":"","Doping_URL":""}
        ]"#,
    )
}
