use std::fmt;

/// Column header of the parameter table
pub const PARAMS_HEADER: [&str; 8] = ["Modality", "x", "y", "z", "TE", "TR", "frames", "TI"];

/// Placeholder for a parameter the probe could not read
pub const NOT_FOUND: &str = "Not found";

/// Acquisition parameters of one scan, as reported by the probe
///
/// Numeric fields are kept as text: either a value formatted to two
/// decimals or [`NOT_FOUND`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ParamRecord {
    pub modality: String,
    pub x: String,
    pub y: String,
    pub z: String,
    pub te: String,
    pub tr: String,
    pub frames: String,
    pub ti: String,
}

impl ParamRecord {
    /// Parses the comma-separated probe reply
    ///
    /// The first field is the modality; the remaining seven are formatted
    /// with [`format_param`]. Missing trailing fields become [`NOT_FOUND`].
    pub fn from_reply(reply: &str) -> Self {
        let mut fields = reply.trim_end_matches(['\n', '\r']).split(',');
        let modality = fields.next().unwrap_or_default().to_string();
        let mut next = || fields.next().map(format_param).unwrap_or_else(|| NOT_FOUND.to_string());

        Self {
            modality,
            x: next(),
            y: next(),
            z: next(),
            te: next(),
            tr: next(),
            frames: next(),
            ti: next(),
        }
    }

    /// Returns the record as a table row in header order
    pub fn to_row(&self) -> [&str; 8] {
        [
            &self.modality,
            &self.x,
            &self.y,
            &self.z,
            &self.te,
            &self.tr,
            &self.frames,
            &self.ti,
        ]
    }
}

impl fmt::Display for ParamRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_row().join(","))
    }
}

/// Formats a raw parameter to two decimals, or [`NOT_FOUND`]
pub fn format_param(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(v) => format!("{:.2}", v),
        Err(_) => NOT_FOUND.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_param() {
        assert_eq!(format_param("2"), "2.00");
        assert_eq!(format_param(" 0.8999 "), "0.90");
        assert_eq!(format_param(""), NOT_FOUND);
        assert_eq!(format_param("msec"), NOT_FOUND);
    }

    #[test]
    fn test_from_reply() {
        let record = ParamRecord::from_reply("T1w,0.8,0.8,0.8,2.22,2400,1,1000\n");
        assert_eq!(record.modality, "T1w");
        assert_eq!(record.x, "0.80");
        assert_eq!(record.tr, "2400.00");
        assert_eq!(record.frames, "1.00");
        assert_eq!(record.ti, "1000.00");
    }

    #[test]
    fn test_from_short_reply() {
        let record = ParamRecord::from_reply("rfMRIREST1,2,2");
        assert_eq!(record.y, "2.00");
        assert_eq!(record.z, NOT_FOUND);
        assert_eq!(record.ti, NOT_FOUND);
        assert_eq!(record.to_row().len(), PARAMS_HEADER.len());
    }
}
