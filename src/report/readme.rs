//! The embedded README template
//!
//! Literal document text with one `{<target>_results}` placeholder per
//! supported board. Everything outside the placeholders is emitted as-is.

/// The full README skeleton.
pub const README_TEMPLATE: &str = r#"# AutoBenchmark

Runtime of the library's sorting functions across the supported boards, for
several array sizes.

**Version**: v1.0.0

**DO NOT EDIT**: this file is generated from the per-board timing files; run
`sortbench-report > README.md` to rebuild it.

## Dependencies

The benchmark sketch itself has no library dependencies. Rebuilding this
document requires:

* the `generate_table.awk` formatter script, kept next to the timing files
* the `sortbench-report` tool

## How to Generate

The raw `*.txt` timing files are collected one board at a time over the
serial port:

1. Connect a board and find its serial device.
2. Flash the benchmark sketch and capture its output into `<board>.txt`.
3. Power the board down and repeat with the next one.

The `generate_table.awk` script turns one raw timing file into the ASCII
table embedded in the matching section below:

```
$ ./generate_table.awk < nano.txt
```

Running the formatter by hand for every file is not necessary: the
`sortbench-report` tool performs all of the invocations and rebuilds the
whole document in one go:

```
$ sortbench-report > README.md
```

## CPU Time Changes

**v0.1**

* Initial results.
* The C-library `qsort()` is far slower than the C++ version because every
  comparison goes through a function pointer.

**v0.3**

* No measurable change after routing the 2-argument sorting functions
  through the 3-argument versions with a default lambda.

**v0.3+**

* Add N=1000 for the Pro Micro, which has 2.5 kB of RAM.
    * Except for the C-library `qsort()`, which runs out of stack space
      due to recursion.
    * The Shell Sort variants hold up well against Quick Sort at N=1000.
    * Move the Shell Sort to Quick Sort cut-over recommendation from
      N >= ~100 up to ~1000.

**v1.0.0**

* Upgrade tool chains. No significant runtime changes.

## Results

Runtime of each sorting function in milliseconds, when sorting different
array sizes.

### Arduino Nano

* 16 MHz ATmega328P
* `micros()` has a resolution of 4 microseconds

```
{nano_results}
```

### SparkFun Pro Micro

* 16 MHz ATmega32U4
* `micros()` has a resolution of 4 microseconds

```
{micro_results}
```

### SAMD21 M0 Mini

* 48 MHz ARM Cortex-M0+

```
{samd_results}
```

### STM32 Blue Pill

* STM32F103C8, 72 MHz ARM Cortex-M3

```
{stm32_results}
```

### ESP8266

* NodeMCU 1.0, 80 MHz ESP8266

```
{esp8266_results}
```

### ESP32

* ESP32-01 dev board, 240 MHz Tensilica LX6

```
{esp32_results}
```

### Teensy 3.2

* 96 MHz ARM Cortex-M4

```
{teensy32_results}
```
"#;
