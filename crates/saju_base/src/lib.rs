//! Four Pillars (사주) chart engine and rule evaluation.
//!
//! This crate provides:
//! - Calendar primitives: elements, stems, branches, the 60-entry cycle
//! - Chart construction from a civil date and optional wall-clock time
//! - Analysis: element distribution, ten gods, hidden stems, interactions,
//!   day-master strength, favorable elements, spirit stars (신살)
//! - Two-chart compatibility scoring
//! - Decade, year, month and day fortune projection
//!
//! Every operation is a pure function over immutable inputs; rule tables
//! are exhaustive matches over closed enumerations.

pub mod analysis;
pub mod branch;
pub mod chart;
pub mod compatibility;
pub mod distribution;
pub mod element;
pub mod error;
pub mod fortune;
pub mod ganji;
pub mod hidden_stem;
pub mod interaction;
pub mod sinsal;
pub mod stem;
pub mod strength;
pub mod ten_god;

pub use analysis::{ChartAnalysis, analyze};
pub use branch::{ALL_BRANCHES, Branch, Direction};
pub use chart::{
    ALL_POSITIONS, Chart, ChartConfig, PillarPosition, ZiHourPolicy, build_chart,
    build_chart_with, candidate_hour_pillars, day_pillar, hour_pillar, month_pillar,
    solar_month_offset, solar_month_pillar, year_pillar,
};
pub use compatibility::{
    CategoryScore, CategoryScores, CompatibilityResult, CompatibilityWeights, CrossFinding,
    CrossRelation, DayBranchRelation, Grade, StemCombination, score as score_compatibility,
    score_with as score_compatibility_with,
};
pub use distribution::{ElementDistribution, element_distribution};
pub use element::{ALL_ELEMENTS, Element, ElementRelation, ElementRole, YinYang};
pub use error::SajuError;
pub use fortune::{
    AnnualPeriod, DailyPeriod, DecadePeriod, DecadeTransition, FortuneConfig, FortuneOverview,
    Gender, LifePoint, MonthlyPeriod, PeriodCategory, ShortTermRelation, Traversal,
    YearHighlight, daily_period, fortune_overview, life_graph, month_calendar, monthly_period,
    project_decades, project_months, project_years,
};
pub use ganji::{
    CYCLE_LEN, Pillar, SEXAGENARY_EPOCH_JDN, SEXAGENARY_EPOCH_YEAR, day_ganji, sexagenary_cycle,
    year_ganji,
};
pub use hidden_stem::{HiddenStemRole, HiddenStems, hidden_stems};
pub use interaction::{
    Characters, FrameCompleteness, HarmonyFrame, Interaction, InteractionKind, PunishmentKind,
    chart_interactions, harmony_frames, stem_combination,
};
pub use sinsal::{
    ALL_SINSALS, Sinsal, SinsalFinding, StarTarget, chart_sinsals, sinsal_positions,
};
pub use stem::{ALL_STEMS, Stem};
pub use strength::{FavorableElements, StrengthAssessment, StrengthLevel, assess_strength};
pub use ten_god::{ALL_TEN_GODS, ChartTenGods, TenGod, chart_ten_gods, ten_god, ten_god_at};
