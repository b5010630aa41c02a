use cachegrid_model::{Assignment, Instance};

pub fn score(input: &str, solution: &str, format: &str) -> anyhow::Result<()> {
    let instance = Instance::parse(&std::fs::read_to_string(input)?)?;
    let assignment = Assignment::parse(&std::fs::read_to_string(solution)?)?;

    let report = cachegrid_scoring::score(&instance, &assignment)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            println!("{}", report.score);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const INSTANCE: &str = "\
2 1 1 1 5
3 4
100 1
0 20
0 0 10
";

    fn temp_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn scores_a_valid_solution() {
        let input = temp_file(INSTANCE);
        let solution = temp_file("1\n0 0\n");
        let result = score(
            input.path().to_str().unwrap(),
            solution.path().to_str().unwrap(),
            "text",
        );
        assert!(result.is_ok());
    }

    #[test]
    fn infeasible_solution_is_an_error() {
        let input = temp_file(INSTANCE);
        // Videos 0 and 1 together exceed the 5 MB capacity.
        let solution = temp_file("1\n0 0 1\n");
        let result = score(
            input.path().to_str().unwrap(),
            solution.path().to_str().unwrap(),
            "text",
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_input_file_is_an_error() {
        let solution = temp_file("0\n");
        let result = score(
            "/nonexistent/instance.in",
            solution.path().to_str().unwrap(),
            "text",
        );
        assert!(result.is_err());
    }

    #[test]
    fn json_format_is_accepted() {
        let input = temp_file(INSTANCE);
        let solution = temp_file("1\n0 0\n");
        let result = score(
            input.path().to_str().unwrap(),
            solution.path().to_str().unwrap(),
            "json",
        );
        assert!(result.is_ok());
    }
}
