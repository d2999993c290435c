//! 时间戳定义及与宿主 FILETIME 的换算

use chrono::{DateTime, TimeZone, Utc};

/// 1601-01-01 到 1970-01-01 的秒数
const FILETIME_UNIX_OFFSET_SECS: i64 = 11_644_473_600;
/// FILETIME 每秒的刻度数（100ns 为一个刻度）
const FILETIME_TICKS_PER_SEC: i64 = 10_000_000;

/// 自 Unix 纪元起的时间
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSpec {
    /// 秒
    pub tv_sec: i64,
    /// 纳秒
    pub tv_nsec: i64,
}

impl TimeSpec {
    /// Unix 纪元
    pub const ZERO: TimeSpec = TimeSpec {
        tv_sec: 0,
        tv_nsec: 0,
    };

    /// 由秒和纳秒构造，纳秒会被规整到 [0, 1e9)
    pub const fn new(sec: i64, nsec: i64) -> Self {
        Self {
            tv_sec: sec + nsec.div_euclid(1_000_000_000),
            tv_nsec: nsec.rem_euclid(1_000_000_000),
        }
    }

    /// 转换为宿主的 FILETIME 刻度（自 1601-01-01 起的 100ns 数）
    ///
    /// 早于 1601 年的时间截断为 0。
    pub fn to_filetime(&self) -> u64 {
        let ticks = self
            .tv_sec
            .saturating_add(FILETIME_UNIX_OFFSET_SECS)
            .saturating_mul(FILETIME_TICKS_PER_SEC)
            .saturating_add(self.tv_nsec / 100);
        ticks.max(0) as u64
    }

    /// 由宿主的 FILETIME 刻度构造
    pub fn from_filetime(ticks: u64) -> Self {
        let ticks = ticks.min(i64::MAX as u64) as i64;
        let secs = ticks / FILETIME_TICKS_PER_SEC - FILETIME_UNIX_OFFSET_SECS;
        let nsec = (ticks % FILETIME_TICKS_PER_SEC) * 100;
        Self::new(secs, nsec)
    }

    /// 由 chrono 时间构造
    pub fn from_datetime(dt: &DateTime<Utc>) -> Self {
        Self::new(dt.timestamp(), i64::from(dt.timestamp_subsec_nanos()))
    }

    /// 转换为 chrono 时间，超出 chrono 表示范围时返回 None
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.tv_sec, self.tv_nsec as u32).single()
    }
}
