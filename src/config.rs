//! Request options and the validated plan they resolve to.
//!
//! Options are accepted as given on the command line (any integer) and clamped once in
//! [`ReportOptions::resolve`]; everything downstream works with the resolved
//! [`ReportPlan`].

use bon::Builder;

pub const DEFAULT_LOOKBACK_HOURS: i32 = 24;
pub const MIN_LOOKBACK_HOURS: i32 = 1;
pub const MAX_LOOKBACK_HOURS: i32 = 24;
/// Upper bound on METARs printed per station.
pub const MAX_METAR_COUNT: i32 = 24;

/// What to fetch and how much of it to print.
///
/// # Examples
///
/// ```
/// use tafs::ReportOptions;
///
/// let plan = ReportOptions::builder()
///     .metar_count(40)
///     .taf_hours(0)
///     .build()
///     .resolve();
/// assert_eq!(plan.metar_cap, 24);
/// assert_eq!(plan.taf_hours, 1);
/// assert!(plan.fetch_tafs);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct ReportOptions {
    /// How many hours back to look for TAFs. Clamped to 1..=24.
    #[builder(default = DEFAULT_LOOKBACK_HOURS)]
    pub taf_hours: i32,
    /// How many hours back to look for METARs. Clamped to 1..=24.
    #[builder(default = DEFAULT_LOOKBACK_HOURS)]
    pub metar_hours: i32,
    /// Maximum METARs printed per station. 0 means METARs are not fetched at all.
    #[builder(default)]
    pub metar_count: i32,
    /// Skip TAFs. At least one METAR per station is then requested.
    #[builder(default)]
    pub metar_only: bool,
    /// Fail extraction of a payload on a malformed element instead of keeping the
    /// records read so far.
    #[builder(default)]
    pub strict: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Resolved request parameters, all within their valid ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPlan {
    pub fetch_tafs: bool,
    pub taf_hours: u8,
    pub fetch_metars: bool,
    pub metar_hours: u8,
    /// METARs printed per station, 0..=24.
    pub metar_cap: usize,
    /// Ask the provider for the latest METAR per station only.
    pub metar_most_recent: bool,
    pub strict: bool,
}

impl ReportPlan {
    /// TAF requests always ask for the latest TAF per station.
    pub const TAF_MOST_RECENT: bool = true;
}

impl ReportOptions {
    pub fn resolve(&self) -> ReportPlan {
        let mut metar_cap = self.metar_count.clamp(0, MAX_METAR_COUNT);
        if self.metar_only {
            metar_cap = metar_cap.max(1);
        }

        ReportPlan {
            fetch_tafs: !self.metar_only,
            taf_hours: clamp_hours(self.taf_hours),
            fetch_metars: metar_cap > 0,
            metar_hours: clamp_hours(self.metar_hours),
            metar_cap: metar_cap as usize,
            metar_most_recent: metar_cap <= 1,
            strict: self.strict,
        }
    }
}

fn clamp_hours(hours: i32) -> u8 {
    hours.clamp(MIN_LOOKBACK_HOURS, MAX_LOOKBACK_HOURS) as u8
}
