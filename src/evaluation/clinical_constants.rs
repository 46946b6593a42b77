//! Clinical constants based on published guideline thresholds
//!
//! This module contains the human-authored constants used throughout the
//! rule evaluation pipeline. These values are fixed rule inputs drawn from
//! published clinical guidelines; they are not fitted parameters and nothing
//! in this crate learns or adjusts them at runtime.

/// Blood glucose alert bounds (mg/dL)
///
/// References:
/// - American Diabetes Association, Standards of Care in Diabetes, Glycemic Targets
/// - https://diabetesjournals.org/care/issue/47/Supplement_1
pub mod glucose {
    /// Critical high bound; sustained values above this level warrant
    /// immediate follow-up
    /// Reference: ADA postprandial action threshold (>180 mg/dL)
    pub const CRITICAL_HIGH_MG_DL: f64 = 180.0;

    /// Warning high bound; above the normal postprandial range
    /// Reference: ADA peak postprandial target (<140 mg/dL)
    pub const WARNING_HIGH_MG_DL: f64 = 140.0;

    /// Warning low bound; hypoglycemia alert level 1
    /// Reference: ADA hypoglycemia classification, level 1 (<70 mg/dL)
    pub const WARNING_LOW_MG_DL: f64 = 70.0;

    /// Critical low bound; clinically significant hypoglycemia
    /// Reference: ADA hypoglycemia classification, level 2 (<54 mg/dL)
    pub const CRITICAL_LOW_MG_DL: f64 = 54.0;
}

/// Blood pressure alert bounds (mmHg), high side only
///
/// References:
/// - 2017 ACC/AHA Guideline for the Prevention, Detection, Evaluation, and
///   Management of High Blood Pressure in Adults
/// - https://www.ahajournals.org/doi/10.1161/HYP.0000000000000065
pub mod blood_pressure {
    /// Hypertensive crisis systolic bound
    pub const CRITICAL_SYSTOLIC_MMHG: f64 = 180.0;

    /// Hypertensive crisis diastolic bound
    pub const CRITICAL_DIASTOLIC_MMHG: f64 = 120.0;

    /// Stage 2 hypertension systolic bound
    pub const WARNING_SYSTOLIC_MMHG: f64 = 140.0;

    /// Stage 2 hypertension diastolic bound
    pub const WARNING_DIASTOLIC_MMHG: f64 = 90.0;
}

/// Resting heart rate alert bounds (bpm)
///
/// References:
/// - Mason et al. (2007). Electrocardiographic reference ranges derived from
///   79,743 ambulatory subjects
pub mod heart_rate {
    /// Critical high bound for a resting measurement
    pub const CRITICAL_HIGH_BPM: f64 = 150.0;

    /// Warning high bound; sustained resting tachycardia
    pub const WARNING_HIGH_BPM: f64 = 120.0;

    /// Warning low bound; bradycardia worth follow-up in non-athletes
    pub const WARNING_LOW_BPM: f64 = 50.0;

    /// Critical low bound; marked bradycardia
    pub const CRITICAL_LOW_BPM: f64 = 40.0;
}

/// Total cholesterol alert bounds (mg/dL), high side only
///
/// References:
/// - NCEP ATP III classification of total blood cholesterol
/// - https://www.nhlbi.nih.gov/files/docs/guidelines/atp3xsum.pdf
pub mod cholesterol {
    /// Critical high bound; "high" total cholesterol per ATP III
    pub const CRITICAL_HIGH_TOTAL_MG_DL: f64 = 240.0;

    /// Warning high bound; "borderline high" per ATP III
    pub const WARNING_HIGH_TOTAL_MG_DL: f64 = 200.0;
}

/// Body temperature alert bounds (°C)
///
/// References:
/// - CDC fever definition (≥38.0 °C / 100.4 °F)
/// - Brown & Brugger (2012). Accidental hypothermia, NEJM 367:1930-1938
pub mod temperature {
    /// Critical high bound; high fever (~103 °F)
    pub const CRITICAL_HIGH_CELSIUS: f64 = 39.4;

    /// Warning high bound; fever threshold
    pub const WARNING_HIGH_CELSIUS: f64 = 38.0;

    /// Warning low bound; below normal core range
    pub const WARNING_LOW_CELSIUS: f64 = 36.0;

    /// Critical low bound; hypothermia
    pub const CRITICAL_LOW_CELSIUS: f64 = 35.0;
}

/// Body weight follow-up band (kg)
///
/// Plausibility bounds for adult self-reported weight rather than a clinical
/// diagnosis; breaches prompt a data review or practitioner follow-up.
pub mod weight {
    /// Critical high bound
    pub const CRITICAL_HIGH_KG: f64 = 160.0;

    /// Warning high bound
    pub const WARNING_HIGH_KG: f64 = 120.0;

    /// Warning low bound
    pub const WARNING_LOW_KG: f64 = 50.0;

    /// Critical low bound
    pub const CRITICAL_LOW_KG: f64 = 40.0;
}

/// Daily caloric intake monitor thresholds (kcal)
///
/// References:
/// - Dietary Guidelines for Americans 2020-2025, estimated calorie needs
pub mod daily_intake {
    /// Informational threshold; typical adult reference intake reached
    pub const INFO_THRESHOLD_KCAL: f64 = 2000.0;

    /// Warning threshold; intake well above the reference day
    pub const WARNING_THRESHOLD_KCAL: f64 = 2500.0;
}

/// Energy conversion factors (kcal per gram)
///
/// References:
/// - Atwater general factor system, USDA Agriculture Handbook No. 74
pub mod energy {
    /// Carbohydrate and sugar energy factor
    pub const KCAL_PER_GRAM_CARBOHYDRATE: f64 = 4.0;

    /// Fat energy factor
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// General population (WHO-style) guideline limits
///
/// References:
/// - WHO Guideline: Sodium intake for adults and children (2012)
/// - WHO Guideline: Sugars intake for adults and children (2015)
/// - https://www.who.int/publications/i/item/9789241504836
pub mod who_guidelines {
    /// Daily sodium limit (mg); 2 g sodium is roughly 5 g of salt
    pub const SODIUM_LIMIT_MG: f64 = 2000.0;

    /// Free sugar ceiling as percent of meal energy
    pub const FREE_SUGAR_MAX_PERCENT_ENERGY: f64 = 10.0;

    /// Minimum daily fiber (g) at the reference intake
    pub const FIBER_MIN_G_PER_REFERENCE_DAY: f64 = 25.0;
}

/// Cardiovascular (AHA-style) guideline limits
///
/// References:
/// - AHA sodium reduction recommendation (ideal limit 1,500 mg/day)
/// - AHA Presidential Advisory on Dietary Fats (2017)
/// - AHA added sugars scientific statement (2016)
pub mod aha_guidelines {
    /// Ideal daily sodium limit (mg) for people with cardiovascular risk
    pub const SODIUM_LIMIT_MG: f64 = 1500.0;

    /// Saturated fat ceiling as percent of meal energy
    pub const SATURATED_FAT_MAX_PERCENT_ENERGY: f64 = 6.0;

    /// Daily dietary cholesterol limit (mg)
    pub const DIETARY_CHOLESTEROL_LIMIT_MG: f64 = 300.0;

    /// Added sugar ceiling as percent of meal energy
    pub const ADDED_SUGAR_MAX_PERCENT_ENERGY: f64 = 6.0;
}

/// Diabetes (ADA-style) guideline limits
///
/// References:
/// - ADA Standards of Care, nutrition therapy for adults with diabetes
/// - Atkinson et al. (2008). International tables of glycemic index and
///   glycemic load values
pub mod ada_guidelines {
    /// Lower end of the per-meal carbohydrate band (g); below risks
    /// hypoglycemia under glucose-lowering medication
    pub const CARB_PER_MEAL_MIN_G: f64 = 30.0;

    /// Upper end of the per-meal carbohydrate band (g); above risks a
    /// postprandial spike
    pub const CARB_PER_MEAL_MAX_G: f64 = 75.0;

    /// Per-meal glycemic load limit; above this is classified high
    pub const GLYCEMIC_LOAD_LIMIT: f64 = 20.0;

    /// Assumed glycemic index when the meal supplies none
    /// Reference: boundary between low and medium GI classifications
    pub const DEFAULT_GLYCEMIC_INDEX: f64 = 55.0;

    /// Minimum daily fiber (g) at the reference intake
    /// Reference: 14 g per 1,000 kcal, Dietary Guidelines for Americans
    pub const FIBER_MIN_G_PER_REFERENCE_DAY: f64 = 28.0;
}

/// Compliance scoring weights and status bands
pub mod scoring {
    /// Reference daily energy intake (kcal) used for fiber extrapolation
    pub const REFERENCE_DAILY_KCAL: f64 = 2000.0;

    /// Fraction of an upper limit above which a measured value becomes a
    /// warning instead of compliant
    pub const WARNING_BAND_RATIO: f64 = 0.8;

    /// Penalty for a critical-severity violation
    pub const CRITICAL_VIOLATION_PENALTY: i32 = 15;

    /// Penalty for a high-severity violation
    pub const HIGH_VIOLATION_PENALTY: i32 = 10;

    /// Penalty for any other violation severity
    pub const DEFAULT_VIOLATION_PENALTY: i32 = 5;

    /// Penalty per warning finding
    pub const WARNING_PENALTY: i32 = 3;

    /// Bonus per compliant finding
    pub const COMPLIANT_BONUS: i32 = 5;

    /// Minimum score for "compliant" status
    pub const COMPLIANT_STATUS_MIN: u8 = 80;

    /// Minimum score for "acceptable" status
    pub const ACCEPTABLE_STATUS_MIN: u8 = 60;
}

/// Recommendation engine trigger thresholds and limits
pub mod recommendation {
    /// Latest glucose above this (mg/dL) fires the glucose-management bundle
    pub const GLUCOSE_TRIGGER_MG_DL: f64 = 140.0;

    /// Latest systolic at or above this (mmHg) fires the blood-pressure bundle
    pub const SYSTOLIC_TRIGGER_MMHG: f64 = 140.0;

    /// Latest diastolic at or above this (mmHg) fires the blood-pressure bundle
    pub const DIASTOLIC_TRIGGER_MMHG: f64 = 90.0;

    /// Recency window for biometric signal extraction (days)
    pub const SIGNAL_WINDOW_DAYS: i64 = 7;

    /// Catalog items scored per suitability ranking pass
    pub const MAX_CATALOG_SAMPLE: usize = 20;

    /// Food suggestions returned per request
    pub const MAX_FOOD_SUGGESTIONS: usize = 5;

    /// Meal candidates returned per request
    pub const MAX_MEAL_CANDIDATES: usize = 5;

    /// Fixed confidence attached to ingredient swap suggestions
    pub const SWAP_CONFIDENCE: f64 = 0.85;
}

/// Food suitability scoring adjustments
pub mod suitability {
    /// Every catalog item starts here
    pub const BASE_SCORE: f64 = 1.0;

    /// Bonus for matching an active signal's favored name list
    pub const FAVOR_ADJUSTMENT: f64 = 0.2;

    /// Penalty for matching an active signal's avoid name list
    pub const AVOID_ADJUSTMENT: f64 = 0.3;

    /// Scores never fall below this floor
    pub const MIN_SCORE: f64 = 0.0;
}

/// Meal candidate ranking rules
pub mod candidate_ranking {
    /// Candidate scores live on a 0-10 scale
    pub const MAX_SCORE: f64 = 10.0;

    /// Base score assumed when the catalog entry carries no rating
    pub const DEFAULT_HEALTH_SCORE: f64 = 5.0;

    /// Day's carbohydrates beyond this (g) start penalizing carb-heavy picks
    pub const CARBS_SO_FAR_PENALTY_THRESHOLD_G: f64 = 200.0;

    /// Penalty divisor applied to a candidate's carbohydrate grams
    pub const CARBS_PENALTY_DIVISOR: f64 = 50.0;

    /// Day's protein below this (g) starts rewarding protein-rich picks
    pub const PROTEIN_SO_FAR_BONUS_THRESHOLD_G: f64 = 50.0;

    /// Bonus divisor applied to a candidate's protein grams
    pub const PROTEIN_BONUS_DIVISOR: f64 = 20.0;

    /// Diabetes filter: candidate sugar must stay below this (g)
    pub const DIABETES_SUGAR_LIMIT_G: f64 = 20.0;

    /// Diabetes filter: candidate fiber must exceed this (g)
    pub const DIABETES_FIBER_MIN_G: f64 = 3.0;

    /// Hypertension filter: candidate sodium must stay below this (mg)
    pub const HYPERTENSION_SODIUM_LIMIT_MG: f64 = 500.0;

    /// High cholesterol filter: candidate fat must stay below this (g)
    pub const HIGH_CHOLESTEROL_FAT_LIMIT_G: f64 = 15.0;
}
