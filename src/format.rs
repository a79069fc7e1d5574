use core::str;

use chrono::{DateTime, Utc};

use crate::buffer::FixedBuf;
use crate::error::Fatal;

// tag + length byte + fourteen digits + zone suffix, plus one spare byte;
// an overlong rendering surfaces in the length check, not as an overrun
pub const BUF_CAPACITY: usize = 18;

// Each variant embeds its tag and declared-length bytes ahead of the
// strftime directives; the declared length covers the digits and the
// trailing zone suffix.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TimestampFormat {
    UtcTime,
    GeneralizedTime,
}

impl TimestampFormat {
    // Years past 2049 do not fit the two-digit form; earlier years would,
    // but every timestamp is emitted in the four-digit form, so the
    // two-digit form is never chosen.
    pub fn select(_year: i64) -> Self { TimestampFormat::GeneralizedTime }

    pub fn pattern(self) -> &'static str {
        match self {
            TimestampFormat::UtcTime => "\x17\x0d%y%m%d%H%M%SZ",
            TimestampFormat::GeneralizedTime => "\x18\x0f%Y%m%d%H%M%SZ",
        }
    }

    pub fn prefix(self) -> [u8; 2] {
        let fmt = self.pattern().as_bytes();
        [fmt[0], fmt[1]]
    }

    pub fn encoded_len(self) -> usize { self.pattern().as_bytes()[1] as usize + 2 }

    pub fn render(self, time: &DateTime<Utc>, buf: &mut [u8]) -> usize {
        use core::fmt::Write;
        let mut out = FixedBuf::new(buf);
        // a full sink cuts the write short; verify reports the shortfall
        let _ = write!(out, "{}", time.format(self.pattern()));
        out.written()
    }

    pub fn verify(self, buf: &[u8], size: usize) -> Result<&str, Fatal> {
        let expected = self.encoded_len();
        if size != expected {
            return Err(Fatal::SizeMismatch { expected, actual: size })
        }
        let encoded = &buf[..size];
        if encoded[..2] != self.prefix() || encoded[2..].contains(&0) {
            return Err(Fatal::Malformed)
        }
        str::from_utf8(&encoded[2..]).map_err(|_| Fatal::Malformed)
    }
}
