use std::io::{self, Write};

use colored::*;
use image_rater_core::{ImageRef, LikertScore};

pub fn print_intro() {
    println!("{}", "HUMAN ORIENTED METHOD".bold());
    println!();
    println!("This study is part of a Master's project on fake image detection.");
    println!();
    println!("For each image:");
    println!("  - Please rate how random the image appears.");
    println!("  - Please rate how organized the image appears.");
    println!();
    println!("Use the scale:");
    for score in LikertScore::ALL {
        println!("  {}", score);
    }
    println!();
    println!("There are no right or wrong answers. Thank you for your help!");
}

pub fn print_image_header(position: usize, total: usize, image: &ImageRef) {
    println!();
    println!("{}", format!("Image {} of {}", position, total).bold());
    println!("  {}", image.path.display());
}

/// Read a 1-5 answer for one statement, looping until the input is valid.
/// A bare Enter accepts the midpoint default.
pub fn prompt_score(statement: &str) -> io::Result<LikertScore> {
    let default = LikertScore::default();
    let mut input = String::new();

    loop {
        input.clear();

        print!("{} [1-5, Enter = {}]: ", statement, default.value());
        io::stdout().flush()?;

        io::stdin().read_line(&mut input)?;
        let answer = input.trim();

        if answer.is_empty() {
            return Ok(default);
        }

        match answer
            .parse::<u8>()
            .ok()
            .and_then(|value| LikertScore::from_value(value).ok())
        {
            Some(score) => return Ok(score),
            None => println!("{}", "Please answer with a number from 1 to 5.".yellow()),
        }
    }
}
