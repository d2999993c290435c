//! 读写自旋锁
//!
//! 多个读者可同时持有，写者独占。写者排队时设置等待位，新读者见到等待位即
//! 退让，已持有的读者退出后写者立即进入，持续的读负载不会把写者饿死。

use core::{
    hint,
    sync::atomic::{AtomicUsize, Ordering},
};

use lock_api::{GuardSend, RawRwLock};

/// 写者持有标志
const WRITER: usize = 1;
/// 有写者在等待
const WRITER_WAITING: usize = 2;
/// 每个读者占用的计数单位
const ONE_READER: usize = 4;

/// 读写自旋锁的原始实现
#[derive(Debug)]
pub struct RawRwSpinLock {
    state: AtomicUsize,
}

impl RawRwSpinLock {
    /// 创建一个未被持有的读写锁
    pub const fn new() -> Self {
        Self {
            state: AtomicUsize::new(0),
        }
    }

    /// 是否有写者正在等待
    pub fn has_waiting_writer(&self) -> bool {
        self.state.load(Ordering::Relaxed) & WRITER_WAITING != 0
    }
}

impl Default for RawRwSpinLock {
    fn default() -> Self {
        Self::new()
    }
}

// SAFETY: 写者只能在既无读者也无写者时进入，读者只能在没有写者持有或等待时
// 增加计数，二者均通过 Acquire/Release 原子操作维护。
unsafe impl RawRwLock for RawRwSpinLock {
    #[allow(clippy::declare_interior_mutable_const)]
    const INIT: Self = RawRwSpinLock::new();

    type GuardMarker = GuardSend;

    fn lock_shared(&self) {
        while !self.try_lock_shared() {
            hint::spin_loop();
        }
    }

    fn try_lock_shared(&self) -> bool {
        let mut state = self.state.load(Ordering::Relaxed);
        while state & (WRITER | WRITER_WAITING) == 0 {
            match self.state.compare_exchange_weak(
                state,
                state + ONE_READER,
                Ordering::Acquire,
                Ordering::Relaxed,
            ) {
                Ok(_) => return true,
                Err(current) => state = current,
            }
        }
        false
    }

    unsafe fn unlock_shared(&self) {
        self.state.fetch_sub(ONE_READER, Ordering::Release);
    }

    fn lock_exclusive(&self) {
        loop {
            let state = self.state.load(Ordering::Relaxed);
            if state & !WRITER_WAITING == 0 {
                // 进入时清掉等待位，其余等待者会在下一轮重新设置
                if self
                    .state
                    .compare_exchange_weak(state, WRITER, Ordering::Acquire, Ordering::Relaxed)
                    .is_ok()
                {
                    return;
                }
            } else if state & WRITER_WAITING == 0 {
                self.state.fetch_or(WRITER_WAITING, Ordering::Relaxed);
            }
            hint::spin_loop();
        }
    }

    fn try_lock_exclusive(&self) -> bool {
        let state = self.state.load(Ordering::Relaxed);
        state & !WRITER_WAITING == 0
            && self
                .state
                .compare_exchange(state, WRITER, Ordering::Acquire, Ordering::Relaxed)
                .is_ok()
    }

    unsafe fn unlock_exclusive(&self) {
        // 保留其他写者设置的等待位
        self.state.fetch_and(!WRITER, Ordering::Release);
    }

    fn is_locked(&self) -> bool {
        self.state.load(Ordering::Relaxed) & !WRITER_WAITING != 0
    }

    fn is_locked_exclusive(&self) -> bool {
        self.state.load(Ordering::Relaxed) & WRITER != 0
    }
}

/// 读写自旋锁
pub type RwLock<T> = lock_api::RwLock<RawRwSpinLock, T>;

/// 读守卫
pub type RwLockReadGuard<'a, T> = lock_api::RwLockReadGuard<'a, RawRwSpinLock, T>;

/// 写守卫
pub type RwLockWriteGuard<'a, T> = lock_api::RwLockWriteGuard<'a, RawRwSpinLock, T>;
