//! Primitive fact provider: atomic domain values drawn from fixed lookup
//! tables and bounded random generators, parameterized by quality.
//!
//! `AirportFacts` owns the run's random source. It is seeded exactly once
//! and threaded through every factory call, so a fixed seed reproduces the
//! whole dataset.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use aerogen_core::amos::{EventKind, FrequencyUnit, MelCategory, ReportKind};

use crate::quality::{FieldValues, Quality, QualityWeights, make_noisy};

const AIRPORT_CODES: &[&str] = &[
    "TIA", "EVN", "GRZ", "INN", "KLU", "LNZ", "SZG", "VIE", "GYD", "MSQ", "ANR", "BRU", "CRL",
    "LGG", "OST", "SJJ", "TZL", "BOJ", "SOF", "VAR", "DBV", "PUY", "SPU", "ZAD", "ZAG", "LCA",
    "PFO", "BRQ", "PRG", "AAL", "AAR", "BLL", "CPH", "FAE", "TLL", "HEL", "OUL", "RVN", "TMP",
    "TKU", "VAA", "AJA", "BIA", "BOD", "BES", "LIL", "LYS", "MRS", "MPL", "NTE", "NCE", "BVA",
    "CDG", "ORY", "SXB", "RNS", "TLN", "TLS", "FMM", "BER", "SXF", "TXL", "BRE", "CGN", "DTM",
    "DRS", "DUS", "FRA", "HHN", "FDH", "HAM", "HAJ", "FKB", "LEJ", "MUC", "FMO", "NUE", "PAD",
    "STR", "ATH", "CHQ", "CFU", "HER", "KGS", "JMK", "RHO", "JTR", "SKG", "ZTH", "BUD", "DEB",
    "KEF", "ORK", "DUB", "NOC", "KIR", "SNN", "AHO", "AOI", "BRI", "BGY", "BLQ", "BDS", "CAG",
    "CTA", "CIY", "FLR", "GOA", "SUF", "LIN", "MXP", "NAP", "OLB", "PMO", "PEG", "PSR", "PSA",
    "CIA", "FCO", "TPS", "TSF", "TRN", "VCE", "VRN", "ALA", "TSE", "PRN", "RIX", "KUN", "VNO",
    "LUX", "SKP", "MLA", "KIV", "TGD", "TIV", "AMS", "EIN", "GRQ", "MST", "RTM", "AES", "BGO",
    "BOO", "HAU", "KRS", "OSL", "TRF", "SVG", "TOS", "TRD", "GDN", "KTW", "KRK", "POZ", "WAW",
    "WMI", "WRO", "FAO", "LIS", "FNC", "PDL", "OPO", "OTP", "CLJ", "IAS", "TSR", "SVX", "DME",
    "SVO", "VKO", "OVB", "LED", "AER", "BEG", "INI", "BTS", "KSC", "LJU", "ALC", "LEI", "OVD",
    "BCN", "BIO", "FUE", "GRO", "LPA", "IBZ", "XRY", "SPC", "ACE", "MAD", "AGP", "MAH", "PMI",
    "RMU", "REU", "SDR", "SCQ", "SVQ", "TFN", "TFS", "VLC", "ZAZ", "GOT", "MMX", "ARN", "BMA",
    "NYO", "VST", "BSL", "BRN", "GVA", "LUG", "ZRH", "ADA", "ESB", "AYT", "DLM", "IST", "SAW",
    "ADB", "BJV", "TZX", "KBP", "IEV", "LWO", "ODS", "ABZ", "BHD", "BFS", "BHX", "BRS", "CWL",
    "DSA", "EMA", "EDI", "EXT", "GLA", "PIK", "HUY", "JER", "LBA", "LPL", "LCY", "LGW", "LHR",
    "LTN", "SEN", "STN", "MAN", "NCL", "SOU",
];

const DELAY_CODES: &[&str] = &[
    "00", "01", "02", "03", "04", "05", "06", "07", "08", "09", "11", "12", "13", "14", "15",
    "16", "17", "18", "19", "21", "22", "23", "24", "25", "26", "27", "28", "29", "31", "32",
    "33", "34", "35", "36", "37", "38", "39", "41", "42", "43", "44", "45", "46", "47", "48",
    "51", "52", "55", "56", "57", "58", "61", "62", "63", "64", "65", "66", "67", "68", "69",
    "71", "72", "73", "75", "76", "77", "81", "82", "83", "84", "85", "86", "87", "88", "89",
    "91", "92", "93", "94", "95", "96", "97", "98", "99",
];

const ATA_CODES: &[&str] = &[
    "1100", "1210", "1220", "1230", "1240", "1400", "1410", "1420", "1430", "1497", "1800",
    "1810", "1820", "1897", "2100", "2110", "2120", "2130", "2140", "2150", "2160", "2170",
    "2197", "2200", "2210", "2220", "2230", "2250", "2297", "2300", "2310", "2320", "2330",
    "2340", "2350", "2360", "2370", "2397", "2400", "2410", "2420", "2430", "2440", "2450",
    "2460", "2497", "2500", "2510", "2520", "2530", "2540", "2550", "2560", "2570", "2597",
    "2600", "2610", "2620", "2697", "2700", "2710", "2720", "2730", "2740", "2750", "2760",
    "2770", "2780", "2797", "2800", "2810", "2820", "2830", "2840", "2897", "2900", "2910",
    "2920", "2930", "2997", "3000", "3010", "3020", "3030", "3040", "3050", "3060", "3070",
    "3080", "3097", "3100", "3110", "3120", "3130", "3140", "3150", "3160", "3170", "3197",
    "3200", "3210", "3220", "3230", "3240", "3250", "3260", "3270", "3297", "3300", "3310",
    "3320", "3330", "3340", "3350", "3397", "3400", "3410", "3420", "3430", "3440", "3450",
    "3460", "3497", "3500", "3510", "3520", "3530", "3597", "3600", "3610", "3620", "3697",
    "3700", "3710", "3720", "3797", "3800", "3810", "3820", "3830", "3840", "3897", "4500",
    "4597", "4900", "4910", "4920", "4930", "4940", "4950", "4960", "4970", "4980", "4990",
    "4997", "5100", "5200", "5210", "5220", "5230", "5240", "5250", "5260", "5270", "5280",
    "5297", "5300", "5310", "5320", "5330", "5340", "5350", "5397", "5400", "5410", "5420",
    "5497", "5500", "5510", "5520", "5530", "5540", "5550", "5597", "5600", "5610", "5620",
    "5630", "5640", "5697", "5700", "5710", "5720", "5730", "5740", "5750", "5797", "6100",
    "6110", "6120", "6130", "6140", "6197", "6200", "6210", "6220", "6230", "6240", "6297",
    "6300", "6310", "6320", "6330", "6340", "6397", "6400", "6410", "6420", "6440", "6497",
    "6500", "6510", "6520", "6540", "6597", "6700", "6710", "6720", "6730", "6797", "7100",
    "7110", "7120", "7130", "7160", "7170", "7197", "7200", "7210", "7220", "7230", "7240",
    "7250", "7260", "7270", "7297", "7300", "7310", "7320", "7330", "7397", "7400", "7410",
    "7420", "7430", "7497", "7500", "7510", "7520", "7530", "7540", "7597", "7600", "7620",
    "7697", "7700", "7710", "7720", "7730", "7740", "7797", "7800", "7810", "7820", "7830",
    "7897", "7900", "7910", "7920", "7930", "7997", "8000", "8010", "8097", "8100", "8110",
    "8120", "8197", "8200", "8297", "8300", "8397", "8500", "8510", "8520", "8530", "8540",
    "8550", "8560", "8570", "8597",
];

const AIRCRAFT_MODELS: &[&str] = &[
    "A319",
    "A320 family",
    "A320neo family",
    "A321",
    "A330",
    "A330neo",
    "A340",
    "A350 XWB",
    "737",
    "747",
    "767",
    "777",
];

const AIRCRAFT_MANUFACTURERS: &[&str] = &["Airbus", "Boeing"];

// Plausible-but-wrong companies for bad-quality manufacturer fields.
const STRAY_COMPANIES: &[&str] = &[
    "Nordwind Aero Group",
    "Stratus Dynamics",
    "Meridian Airframes",
    "Cloudline Industries",
    "Vector Aviation Works",
    "Pacific Jetcraft",
    "Aurora Aerospace",
    "Kestrel Systems",
];

const FLIGHT_EVENT_KINDS: &[EventKind] = &[EventKind::Delay, EventKind::Safety];

const MAINTENANCE_EVENT_KINDS: &[EventKind] = &[
    EventKind::AircraftOnGround,
    EventKind::Maintenance,
    EventKind::Revision,
];

const MEL_CATEGORIES: &[MelCategory] = &[
    MelCategory::A,
    MelCategory::B,
    MelCategory::C,
    MelCategory::D,
];

const REPORT_KINDS: &[ReportKind] = &[ReportKind::Pirep, ReportKind::Marep];

const FREQUENCY_UNITS: &[FrequencyUnit] = &[
    FrequencyUnit::Flights,
    FrequencyUnit::Days,
    FrequencyUnit::Miles,
];

const REGISTRATION_PREFIX: &str = "XY-";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Source of atomic domain values, owning the run's seeded RNG.
#[derive(Debug, Clone)]
pub struct AirportFacts {
    rng: ChaCha8Rng,
}

impl AirportFacts {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn quality(&mut self, weights: &QualityWeights) -> Quality {
        weights.sample(&mut self.rng)
    }

    /// Uniform integer in `0..=max`.
    pub fn random_int(&mut self, max: i64) -> i64 {
        self.rng.random_range(0..=max.max(0))
    }

    pub fn int_between(&mut self, min: i64, max: i64) -> i64 {
        self.rng.random_range(min..=max.max(min))
    }

    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.random_bool(probability.clamp(0.0, 1.0))
    }

    pub fn coin(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.rng.random_range(0..items.len())]
    }

    pub fn random_string(&mut self, len: usize, charset: &str) -> String {
        let chars: Vec<char> = charset.chars().collect();
        (0..len)
            .map(|_| chars[self.rng.random_range(0..chars.len())])
            .collect()
    }

    pub fn noisy(&mut self, value: &str, max_whitespace: usize) -> String {
        make_noisy(value, &mut self.rng, max_whitespace)
    }

    fn dispatch(&mut self, quality: Quality, values: FieldValues) -> String {
        values.resolve(quality, &mut self.rng)
    }

    pub fn airport_code(&mut self, quality: Quality) -> String {
        let good = (*self.pick(AIRPORT_CODES)).to_string();
        // e.g. "3Ws": one digit and two letters, never a real IATA code
        let bad = format!(
            "{}{}",
            self.random_string(1, DIGITS),
            self.random_string(2, LETTERS)
        );
        self.dispatch(quality, FieldValues::with_bad(good, bad))
    }

    pub fn delay_code(&mut self, quality: Quality) -> String {
        let good = (*self.pick(DELAY_CODES)).to_string();
        let bad = self.random_string(3, DIGITS);
        self.dispatch(quality, FieldValues::with_bad(good, bad))
    }

    pub fn ata_code(&mut self, quality: Quality) -> String {
        let good = (*self.pick(ATA_CODES)).to_string();
        let bad = self.random_string(4, ALPHANUMERIC);
        self.dispatch(quality, FieldValues::with_bad(good, bad))
    }

    pub fn aircraft_model(&mut self, quality: Quality) -> String {
        let good = (*self.pick(AIRCRAFT_MODELS)).to_string();
        let len = self.int_between(5, 14) as usize;
        let bad = self.random_string(len, ALPHANUMERIC);
        self.dispatch(quality, FieldValues::with_bad(good, bad))
    }

    pub fn aircraft_manufacturer(&mut self, quality: Quality) -> String {
        let good = (*self.pick(AIRCRAFT_MANUFACTURERS)).to_string();
        let bad = (*self.pick(STRAY_COMPANIES)).to_string();
        self.dispatch(quality, FieldValues::with_bad(good, bad))
    }

    pub fn flight_number(&mut self, quality: Quality) -> String {
        let good = self.random_string(4, DIGITS);
        let bad = self.random_string(4, ALPHANUMERIC);
        self.dispatch(quality, FieldValues::with_bad(good, bad))
    }

    pub fn registration_code(&mut self, quality: Quality) -> String {
        let good = format!("{REGISTRATION_PREFIX}{}", self.random_string(3, UPPERCASE));
        let bad = self.random_string(6, ALPHANUMERIC);
        self.dispatch(quality, FieldValues::with_bad(good, bad))
    }

    pub fn serial_number(&mut self, quality: Quality) -> String {
        let good = format!("MSN {}", self.random_string(4, DIGITS));
        let prefix_len = self.int_between(2, 3) as usize;
        let suffix_len = self.int_between(3, 6) as usize;
        let bad = format!(
            "{} {}",
            self.random_string(prefix_len, UPPERCASE),
            self.random_string(suffix_len, DIGITS)
        );
        self.dispatch(quality, FieldValues::with_bad(good, bad))
    }

    /// Two distinct airports: (origin, destination).
    pub fn flight_route(&mut self) -> (String, String) {
        let origin = self.rng.random_range(0..AIRPORT_CODES.len());
        let mut destination = self.rng.random_range(0..AIRPORT_CODES.len());
        while destination == origin {
            destination = self.rng.random_range(0..AIRPORT_CODES.len());
        }
        (
            AIRPORT_CODES[origin].to_string(),
            AIRPORT_CODES[destination].to_string(),
        )
    }

    /// Uniform timestamp inside the historical scheduling window. Bad
    /// quality shifts the result by 50-100 years in either direction.
    pub fn flight_timestamp(&mut self, quality: Quality) -> NaiveDateTime {
        let good = self.timestamp_between(window_start(), window_end());
        match quality {
            Quality::Bad => {
                let sign = if self.coin() { 1 } else { -1 };
                let days = self.int_between(50 * 365, 100 * 365);
                good + TimeDelta::days(sign * days)
            }
            _ => good,
        }
    }

    /// Uniform timestamp between two instants, order-insensitive.
    pub fn timestamp_between(&mut self, a: NaiveDateTime, b: NaiveDateTime) -> NaiveDateTime {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let span = (end - start).num_seconds();
        start + TimeDelta::seconds(self.random_int(span))
    }

    pub fn duration(&mut self, max_days: i64, max_hours: i64, max_minutes: i64) -> TimeDelta {
        TimeDelta::days(self.random_int(max_days))
            + TimeDelta::hours(self.random_int(max_hours))
            + TimeDelta::minutes(self.random_int(max_minutes))
    }

    /// Kind-specific bounded event duration. Bad quality blows the value
    /// out of range by a factor in [-100, 100].
    pub fn event_duration(&mut self, kind: EventKind, quality: Quality) -> TimeDelta {
        let good = match kind {
            EventKind::Delay => self.duration(0, 0, 59),
            EventKind::Safety => self.duration(89, 23, 59),
            EventKind::AircraftOnGround => self.duration(0, 23, 59),
            EventKind::Maintenance => self.duration(1, 23, 59).min(TimeDelta::days(1)),
            EventKind::Revision => self.duration(31, 0, 0),
        };
        match quality {
            Quality::Bad => self.corrupt_duration(good),
            _ => good,
        }
    }

    pub fn corrupt_duration(&mut self, duration: TimeDelta) -> TimeDelta {
        duration * self.int_between(-100, 100) as i32
    }

    /// Deferral window for a MEL category. Bad quality ignores the
    /// category and returns a random deadline of up to 500 days.
    pub fn mel_deadline(&mut self, category: MelCategory, quality: Quality) -> TimeDelta {
        if quality == Quality::Bad {
            return TimeDelta::days(self.random_int(500));
        }
        match category {
            MelCategory::A => TimeDelta::days(3),
            MelCategory::B => TimeDelta::days(10),
            MelCategory::C => TimeDelta::days(30),
            MelCategory::D => TimeDelta::days(120),
        }
    }

    /// Composite maintenance identifier encoding the event's end time, to
    /// aid traceability in generated output.
    pub fn maintenance_id(&mut self, max_id: i64, end: NaiveDateTime, quality: Quality) -> String {
        let good = format!(
            "{}_{}",
            self.random_int(max_id),
            end.format("%Y-%m-%d %H:%M:%S")
        );
        let bad = self.random_string(6, ALPHANUMERIC);
        self.dispatch(quality, FieldValues::with_bad(good, bad))
    }

    pub fn flight_event_kind(&mut self) -> EventKind {
        *self.pick(FLIGHT_EVENT_KINDS)
    }

    pub fn maintenance_event_kind(&mut self) -> EventKind {
        *self.pick(MAINTENANCE_EVENT_KINDS)
    }

    pub fn mel_category(&mut self) -> MelCategory {
        *self.pick(MEL_CATEGORIES)
    }

    pub fn report_kind(&mut self) -> ReportKind {
        *self.pick(REPORT_KINDS)
    }

    pub fn frequency_unit(&mut self) -> FrequencyUnit {
        *self.pick(FREQUENCY_UNITS)
    }

    /// Opaque uuid-shaped file reference.
    pub fn file_reference(&mut self) -> String {
        let mut bytes = [0_u8; 16];
        self.rng.fill_bytes(&mut bytes);
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        uuid::Uuid::from_bytes(bytes).to_string()
    }
}

fn window_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2010, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

fn window_end() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2017, 1, 7)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}
