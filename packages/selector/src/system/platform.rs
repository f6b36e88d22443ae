use std::fmt;

const WINDOWS_11_FIRST_BUILD: u32 = 22000;

/// Operating system type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsType {
    MacOS,
    Linux,
    Windows,
    FreeBSD,
    OpenBSD,
    Unknown,
}

impl fmt::Display for OsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsType::MacOS => write!(f, "macOS"),
            OsType::Linux => write!(f, "Linux"),
            OsType::Windows => write!(f, "Windows"),
            OsType::FreeBSD => write!(f, "FreeBSD"),
            OsType::OpenBSD => write!(f, "OpenBSD"),
            OsType::Unknown => write!(f, "Unknown"),
        }
    }
}

/// CPU architecture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Architecture {
    X86_64,
    Aarch64,
    Arm,
    I686,
    /// Target architecture as Rust names it.
    Other(&'static str),
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Architecture::X86_64 => write!(f, "x86_64"),
            Architecture::Aarch64 => write!(f, "aarch64"),
            Architecture::Arm => write!(f, "arm"),
            Architecture::I686 => write!(f, "i686"),
            Architecture::Other(arch) => write!(f, "{}", arch),
        }
    }
}

/// Host facts consumed by the OS activator.
#[derive(Debug, Clone)]
pub struct PlatformInfo {
    pub os_type: OsType,
    pub os_version: String,
    pub arch: Architecture,
    pub kernel_version: Option<String>,
}

impl PlatformInfo {
    /// Value published as `os.name`, spelled the way JVM build tools report it
    /// so existing `os` conditions keep matching.
    pub fn os_name(&self) -> String {
        match self.os_type {
            OsType::MacOS => "Mac OS X".to_string(),
            OsType::Windows => {
                let mut parts = self.os_version.split('.');
                let major = parts.next().unwrap_or_default();
                // Windows 11 still reports 10.0; only the build number tells.
                let build = parts.nth(1).and_then(|b| b.parse::<u32>().ok());
                match (major, build) {
                    ("" | "Unknown", _) => "Windows".to_string(),
                    ("10", Some(build)) if build >= WINDOWS_11_FIRST_BUILD => {
                        "Windows 11".to_string()
                    }
                    (major, _) => format!("Windows {}", major),
                }
            }
            other => other.to_string(),
        }
    }

    /// Value published as `os.arch`, using the JVM's names for x86.
    pub fn os_arch(&self) -> String {
        match self.arch {
            Architecture::X86_64 => "amd64".to_string(),
            Architecture::I686 => "x86".to_string(),
            other => other.to_string(),
        }
    }

    /// Value published as `os.version`: the kernel release where known.
    pub fn os_release(&self) -> String {
        self.kernel_version
            .clone()
            .unwrap_or_else(|| self.os_version.clone())
    }
}

impl fmt::Display for PlatformInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.os_type, self.os_version, self.arch)?;
        if let Some(kernel) = &self.kernel_version {
            write!(f, " [kernel {}]", kernel)?;
        }
        Ok(())
    }
}

/// Platform detection service
pub struct PlatformDetector;

impl PlatformDetector {
    /// Detect the current platform information
    pub fn detect() -> PlatformInfo {
        let info = os_info::get();

        PlatformInfo {
            os_type: Self::detect_os_type(&info),
            os_version: info.version().to_string(),
            arch: Self::detect_architecture(),
            kernel_version: sysinfo::System::kernel_version(),
        }
    }

    fn detect_os_type(info: &os_info::Info) -> OsType {
        match info.os_type() {
            os_info::Type::Macos => OsType::MacOS,
            os_info::Type::Windows => OsType::Windows,
            os_info::Type::Alpine
            | os_info::Type::Arch
            | os_info::Type::CentOS
            | os_info::Type::Debian
            | os_info::Type::Fedora
            | os_info::Type::Linux
            | os_info::Type::Mint
            | os_info::Type::NixOS
            | os_info::Type::openSUSE
            | os_info::Type::OracleLinux
            | os_info::Type::Pop
            | os_info::Type::Raspbian
            | os_info::Type::Redhat
            | os_info::Type::RedHatEnterprise
            | os_info::Type::Solus
            | os_info::Type::Ubuntu => OsType::Linux,
            os_info::Type::FreeBSD => OsType::FreeBSD,
            os_info::Type::OpenBSD => OsType::OpenBSD,
            _ => Self::os_type_from_target(),
        }
    }

    fn os_type_from_target() -> OsType {
        match std::env::consts::OS {
            "macos" => OsType::MacOS,
            "linux" => OsType::Linux,
            "windows" => OsType::Windows,
            "freebsd" => OsType::FreeBSD,
            "openbsd" => OsType::OpenBSD,
            _ => OsType::Unknown,
        }
    }

    fn detect_architecture() -> Architecture {
        match std::env::consts::ARCH {
            "x86_64" => Architecture::X86_64,
            "aarch64" => Architecture::Aarch64,
            "arm" => Architecture::Arm,
            "x86" | "i686" => Architecture::I686,
            other => Architecture::Other(other),
        }
    }
}
