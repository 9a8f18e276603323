//! Data shared with the resume analysis service: the analysis result model,
//! upload response envelopes and the locally generated fallback report.

pub mod model;
pub mod report;
pub mod requests;
