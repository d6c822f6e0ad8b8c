use std::env;
use std::f64::consts::PI;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

fn write_cordic_table() {
    // Micro-rotation ladder i = 1..=ITERS
    const ITERS: usize = 22;
    // Angle units: degrees in 16.16
    const ANGLE_SCALE: f64 = (1 << 16) as f64;

    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("cordic_table.rs");
    let mut file = File::create(dest_path).unwrap();

    writeln!(file, "pub(crate) const TRIG_MAX_ITERS: usize = {};", ITERS)
        .unwrap();
    write!(file, "pub(crate) const TRIG_ARCTAN: [i32; TRIG_MAX_ITERS] = [")
        .unwrap();

    // Gain of the complete ladder, starting at i = 1 since the
    // quarter-turn prerotation covers the i = 0 step.
    let mut gain = 1f64;
    for i in 1..=ITERS {
        if i % 8 == 1 {
            write!(file, "\n   ").unwrap();
        }
        let t = 0.5f64.powi(i as i32);
        let angle = (t.atan() * 180. / PI * ANGLE_SCALE).round() as i32;
        write!(file, " {},", angle).unwrap();
        gain *= (1. + t * t).sqrt();
    }
    writeln!(file, "\n];").unwrap();

    // Shrink factor 1/gain as u0.32
    let scale = ((1u64 << 32) as f64 / gain).round() as u32;
    writeln!(file, "pub(crate) const TRIG_SCALE: u32 = {:#x};", scale)
        .unwrap();

    println!("cargo:rerun-if-changed=build.rs");
}

fn main() {
    write_cordic_table();
}
