use cachegrid_model::Instance;
use cachegrid_placement::{popularity, savings};

pub fn place(
    input: &str,
    strategy: &str,
    output: Option<&str>,
    skip_empty: bool,
) -> anyhow::Result<()> {
    let instance = Instance::parse(&std::fs::read_to_string(input)?)?;

    let plan = match strategy {
        "popularity" => popularity::place(&instance),
        "savings" => savings::place(&instance),
        other => anyhow::bail!("unknown strategy {other:?} (expected popularity or savings)"),
    };

    let assignment = if skip_empty {
        plan.nonempty_assignment()
    } else {
        plan.assignment
    };
    let text = assignment.to_solution_text();

    match output {
        Some(path) => {
            std::fs::write(path, text)?;
            println!("✓ Wrote {path} ({} unplaced)", plan.unplaced);
        }
        None => print!("{text}"),
    }

    Ok(())
}
