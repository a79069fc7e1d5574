use std::convert::TryFrom;
use std::fmt;
use std::process;

use chrono::DateTime;

use crate::clock::{Clock, SystemClock};
use crate::error::Fatal;
use crate::format::{TimestampFormat, BUF_CAPACITY};
use crate::time::CivilTime;

mod buffer;
mod clock;
mod error;
mod format;
mod time;

#[derive(Debug)]
struct Stamp {
    size: usize,
    text: String,
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Size {}, string {}", self.size, self.text)
    }
}

fn stamp(clock: &dyn Clock) -> Result<Stamp, Fatal> {
    let seconds = clock.unix_seconds().ok_or(Fatal::Clock)?;
    let civil = CivilTime::try_from(seconds)?;
    let form = TimestampFormat::select(civil.year);
    let when = DateTime::from_timestamp(seconds as i64, 0).ok_or(Fatal::Clock)?;
    let mut buf = [0u8; BUF_CAPACITY];
    let size = form.render(&when, &mut buf);
    let text = form.verify(&buf, size)?;
    Ok(Stamp { size, text: text.to_owned() })
}

fn main() {
    match stamp(&SystemClock) {
        Ok(stamp) => println!("{}", stamp),
        Err(err) => {
            if let Fatal::SizeMismatch { .. } = err {
                eprintln!("{}", err);
            }
            process::abort()
        },
    }
}
