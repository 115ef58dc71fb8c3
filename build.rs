use std::cmp::Ordering;
use std::env;
use std::process::Command;

// CPU features providing a native 128-bit vector unit
#[derive(PartialEq, Eq, Debug)]
struct CpuFeature {
    name: &'static str,
    cpuinfo_flag: &'static str,
    sysctl_key: &'static str,
    target_arch: &'static str,
    cfg_flag: &'static str,
    detected: bool,
}

impl CpuFeature {
    // Lowest number == Highest Priority
    fn priority(&self) -> usize {
        match self.name {
            "sse2" => 0,
            "neon" => 1,
            _ => usize::MAX,
        }
    }

    fn features() -> Vec<CpuFeature> {
        vec![
            CpuFeature {
                name: "sse2",
                cpuinfo_flag: "sse2",
                sysctl_key: "hw.optional.sse2: 1",
                target_arch: "x86_64",
                cfg_flag: "sse2",
                detected: false,
            },
            CpuFeature {
                name: "neon",
                // aarch64 kernels report NEON as "asimd"
                cpuinfo_flag: "asimd",
                sysctl_key: "hw.optional.neon: 1",
                target_arch: "aarch64",
                cfg_flag: "neon",
                detected: false,
            },
        ]
    }
}

impl Ord for CpuFeature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for CpuFeature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

trait CpuFeatureDetector {
    fn detect_features(&self, features: &mut [CpuFeature]);
    fn is_applicable(&self) -> bool;
}

struct LinuxDetector;
impl CpuFeatureDetector for LinuxDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        if let Ok(cpuinfo) = std::fs::read_to_string("/proc/cpuinfo") {
            let contents = cpuinfo.to_lowercase();
            for feature in features.iter_mut() {
                feature.detected = contents
                    .split_whitespace()
                    .any(|flag| flag == feature.cpuinfo_flag);
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "linux")
    }
}

struct MacOSDetector;
impl CpuFeatureDetector for MacOSDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        let output = Command::new("sysctl").args(["-a"]).output();

        if let Ok(output) = output {
            let contents = String::from_utf8_lossy(&output.stdout).to_lowercase();

            for feature in features.iter_mut() {
                feature.detected = contents.contains(feature.sysctl_key);
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "macos")
    }
}

struct PlatformDetector;
impl PlatformDetector {
    fn cpu_features_detectors() -> Vec<Box<dyn CpuFeatureDetector>> {
        vec![Box::new(LinuxDetector), Box::new(MacOSDetector)]
    }

    fn detect_cpu_features(features: &mut [CpuFeature]) {
        for detector in Self::cpu_features_detectors() {
            if detector.is_applicable() {
                detector.detect_features(features);
                break;
            }
        }
    }

    fn force_fallback() -> bool {
        env::var("SIMDVEC_FORCE_FALLBACK")
            .map(|value| !value.is_empty() && value != "0")
            .unwrap_or(false)
    }

    fn apply(features: &mut [CpuFeature], target_arch: &str) {
        features.sort();

        // The feature must also match the architecture being compiled for,
        // otherwise the software definition is used.
        let cfg_flag = if Self::force_fallback() {
            "fallback"
        } else {
            features
                .iter()
                .find(|cpu_feature| cpu_feature.detected && cpu_feature.target_arch == target_arch)
                .map(|cpu_feature| cpu_feature.cfg_flag)
                .unwrap_or("fallback")
        };

        println!("cargo:rustc-cfg={cfg_flag}");

        println!("cargo::rustc-check-cfg=cfg(sse2)");
        println!("cargo::rustc-check-cfg=cfg(neon)");
        println!("cargo::rustc-check-cfg=cfg(fallback)");
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SIMDVEC_FORCE_FALLBACK");

    let mut features = CpuFeature::features();

    let host = env::var("HOST").unwrap_or_default();
    let target = env::var("TARGET").unwrap_or_default();
    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();

    // Only run CPU detection for native builds
    if host == target {
        PlatformDetector::detect_cpu_features(&mut features);
    }

    PlatformDetector::apply(&mut features, &target_arch);
}
