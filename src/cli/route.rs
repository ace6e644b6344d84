use super::DispatchArgs;

/// Collect the lines `cmdpat dispatch` should route.
///
/// A positional line wins; otherwise stdin is read once and split into
/// one request per line, skipping blank lines.
pub fn request_lines(
    args: &DispatchArgs,
    mut stdin: impl std::io::Read,
) -> Result<Vec<String>, anyhow::Error> {
    if let Some(line) = &args.line {
        return Ok(vec![line.clone()]);
    }

    let mut input = String::new();
    stdin.read_to_string(&mut input)?;

    let lines: Vec<String> = input
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    if lines.is_empty() {
        return Err(anyhow::anyhow!("no lines provided on stdin"));
    }

    Ok(lines)
}
