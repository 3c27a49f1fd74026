//! Interactive driver: pick a catalog problem, enter parameters, then solve
//! it with both fixed-step methods, printing the error table and writing a
//! comparison chart per method.

use std::io::{self, BufRead, Write};

use odelab::prelude::*;

fn main() {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let problem = match pick_problem(&mut input) {
        Ok(problem) => problem,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let params = read_parameters(&mut input, &problem);
    let c = (problem.constant)(params.a, params.y0);
    let options = SolveOptions::builder().build();

    for method in [Method::ImprovedEuler, Method::Adams4] {
        println!("Solving the Cauchy problem with: {}", method.name());
        match solve(method, &problem.rhs, problem.reference, c, &params, &options) {
            Ok(report) => {
                print!("{}", render_table(&report.rows));
                println!(
                    "{} points, {} evaluations of f (plus {} on the half-step run)",
                    report.trajectory.len(),
                    report.trajectory.nfev,
                    report.half_step.nfev
                );
                let file = plot_file(method);
                match render_comparison(
                    file,
                    method.name(),
                    &report.trajectory,
                    problem.reference,
                    c,
                    params.a,
                    params.b,
                ) {
                    Ok(()) => println!("Chart written to {file}"),
                    Err(e) => eprintln!("Chart for {} failed: {e}", method.name()),
                }
            }
            Err(e) => eprintln!("{} failed: {e}", method.name()),
        }
        println!();
    }
}

fn pick_problem(input: &mut impl BufRead) -> Result<Problem, String> {
    println!("Pick an equation for the Cauchy problem:");
    for (i, problem) in catalog().iter().enumerate() {
        println!("{}. {}", i + 1, problem.describe);
    }
    loop {
        let line = read_line(input, "> ").map_err(|e| format!("no selection read: {e}"))?;
        match line.trim().parse::<usize>() {
            Ok(k) if (1..=catalog().len()).contains(&k) => return Ok(catalog()[k - 1]),
            _ => println!("Enter a number between 1 and {}", catalog().len()),
        }
    }
}

/// Prompt for every parameter, falling back to the problem's defaults on an
/// empty line, until the combination passes validation.
fn read_parameters(input: &mut impl BufRead, problem: &Problem) -> Parameters {
    let d = problem.defaults;
    loop {
        let (a, b) = prompt_interval(input, d.a, d.b);
        let y0 = prompt_value(input, "Initial value y0", d.y0);
        let h = prompt_value(input, "Integration step h", d.h);
        let e = prompt_value(input, "Corrector tolerance e", d.e);
        match Parameters::new(a, b, y0, h, e) {
            Ok(params) => return params,
            Err(err) => println!("{err}"),
        }
    }
}

fn prompt_interval(input: &mut impl BufRead, da: Float, db: Float) -> (Float, Float) {
    loop {
        let line = match read_line(input, &format!("Integration interval a b ({da} {db}): ")) {
            Ok(line) => line,
            Err(_) => return (da, db),
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return (da, db);
        }
        let mut parts = trimmed.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some(sa), Some(sb)) => match (sa.parse::<Float>(), sb.parse::<Float>()) {
                (Ok(a), Ok(b)) => return (a, b),
                _ => println!("Enter two numbers separated by a space"),
            },
            _ => println!("Enter two numbers separated by a space"),
        }
    }
}

fn prompt_value(input: &mut impl BufRead, label: &str, default: Float) -> Float {
    loop {
        let line = match read_line(input, &format!("{label} ({default}): ")) {
            Ok(line) => line,
            Err(_) => return default,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return default;
        }
        match trimmed.parse::<Float>() {
            Ok(v) => return v,
            Err(_) => println!("Enter a number"),
        }
    }
}

/// Read one line after showing a prompt; EOF counts as an error so callers
/// can fall back to defaults when stdin is a closed pipe.
fn read_line(input: &mut impl BufRead, prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line)
}

fn plot_file(method: Method) -> &'static str {
    match method {
        Method::ImprovedEuler => "improved_euler.png",
        Method::Adams4 => "adams4.png",
    }
}
