/// 宿主内存状态
///
/// 对应宿主查询到的物理内存与页文件统计，内存文件系统用它报告卷的
/// 总容量与剩余空间。
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStatus {
    /// 内存占用百分比
    pub memory_load: u32,
    /// 物理内存总量，单位为字节
    pub total_phys: u64,
    /// 可用物理内存，单位为字节
    pub avail_phys: u64,
    /// 页文件（提交上限）总量，单位为字节
    pub total_page_file: u64,
    /// 可用页文件，单位为字节
    pub avail_page_file: u64,
    /// 虚拟地址空间总量，单位为字节
    pub total_virtual: u64,
    /// 可用虚拟地址空间，单位为字节
    pub avail_virtual: u64,
}
