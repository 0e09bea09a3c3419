pub const CONVERT_TOOL: &str = "ffmpeg";
pub const PREVIEW_TOOL: &str = "ffplay";

pub struct Invocation {
    pub input: String,
    pub output: Option<String>,
    pub overwrite: bool,
}

/// Assembles the full argument list for the external tool. Omitting the
/// output path selects a live preview instead of a conversion.
pub fn assemble(invocation: &Invocation, filter_expression: &str) -> Vec<String> {
    let mut cmd = Vec::new();

    match &invocation.output {
        None => cmd.push(PREVIEW_TOOL.to_string()),
        Some(_) => {
            cmd.push(CONVERT_TOOL.to_string());
            if invocation.overwrite {
                cmd.push("-y".to_string());
            }
        }
    }

    cmd.push("-i".to_string());
    cmd.push(invocation.input.clone());
    cmd.push("-vf".to_string());
    // One shell token: the expression itself contains the filter grammar's
    // commas and colons.
    cmd.push(format!("\"{}\"", filter_expression));

    if let Some(output) = &invocation.output {
        cmd.push("-codec:a".to_string());
        cmd.push("copy".to_string());
        cmd.push(output.clone());
    }
    cmd
}
