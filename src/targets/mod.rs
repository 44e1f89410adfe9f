//! The fixed set of benchmark targets
//!
//! Each supported board contributes one raw timing file and fills one
//! placeholder in the README template. The set is closed at compile time.

/// One supported board and its place in the README.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    /// Short identifier used in logs and error messages
    pub name: &'static str,
    /// Raw timing file, relative to the results directory
    pub file_name: &'static str,
    /// Template placeholder this target's table fills
    pub placeholder: &'static str,
    /// A missing timing file becomes a TBD section instead of an error
    pub optional: bool,
}

/// All supported targets, in README order.
pub const TARGETS: &[Target] = &[
    Target {
        name: "nano",
        file_name: "nano.txt",
        placeholder: "nano_results",
        optional: false,
    },
    Target {
        name: "micro",
        file_name: "micro.txt",
        placeholder: "micro_results",
        optional: false,
    },
    Target {
        name: "samd",
        file_name: "samd.txt",
        placeholder: "samd_results",
        optional: false,
    },
    Target {
        name: "stm32",
        file_name: "stm32.txt",
        placeholder: "stm32_results",
        optional: false,
    },
    Target {
        name: "esp8266",
        file_name: "esp8266.txt",
        placeholder: "esp8266_results",
        optional: false,
    },
    Target {
        name: "esp32",
        file_name: "esp32.txt",
        placeholder: "esp32_results",
        optional: false,
    },
    // Teensy results are not always collected; its section stays TBD
    // until a fresh teensy32.txt is available.
    Target {
        name: "teensy32",
        file_name: "teensy32.txt",
        placeholder: "teensy32_results",
        optional: true,
    },
];
