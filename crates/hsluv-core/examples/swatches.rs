//! # swatches: Palettes of Uniform Lightness
//!
//! This example prints a table of hex codes. Each row has the same HSLuv
//! lightness and each column the same hue, so that all colors in a row appear
//! equally light. When stdout is a terminal, each hex code is also shown on a
//! background of its own color.
#![allow(clippy::print_stdout)]

use std::io::IsTerminal;

use hsluv_core::{hex_to_rgb, hsluv_from_hexcode, hsluv_to_hexcode, HsluvError};

const HUES: [f64; 8] = [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0];
const LIGHTNESS: [f64; 5] = [20.0, 40.0, 60.0, 80.0, 95.0];
const SATURATION: f64 = 90.0;

fn swatch(hex: &str, styled: bool) -> Result<String, HsluvError> {
    if !styled {
        return Ok(format!(" {} ", hex));
    }

    let [r, g, b] = hex_to_rgb(hex)?.map(|c| (c * 255.0).round() as u8);
    let [_, _, l] = hsluv_from_hexcode(hex)?;
    let fg = if l < 55.0 { 97 } else { 30 };
    Ok(format!("\x1b[{};48;2;{};{};{}m {} \x1b[m", fg, r, g, b, hex))
}

fn main() -> Result<(), HsluvError> {
    let styled = std::io::stdout().is_terminal();

    print!("     ");
    for hue in HUES {
        print!("{:^8}", hue);
    }
    println!();

    for lightness in LIGHTNESS {
        print!("{:>4} ", lightness);
        for hue in HUES {
            let hex = hsluv_to_hexcode(hue, SATURATION, lightness)?;
            print!("{}", swatch(&hex, styled)?);
        }
        println!();
    }

    println!();
    let [h, s, l] = hsluv_from_hexcode("#cd8b00")?;
    println!("#cd8b00 is hsluv({:.3} {:.3} {:.3})", h, s, l);

    Ok(())
}
