//! The upload form page.
//!
//! The template is a process-wide constant; rendering only fills in the
//! optional download link.

const FORM_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
	<title>gridshift CSV Processor</title>
</head>
<body>
	<h1>gridshift CSV Processor</h1>
	<form method="POST" enctype="multipart/form-data">
		<label>Input CSV: <input type="file" name="inputcsv" required></label><br><br>
		<label>Empty Row Every N: <input type="number" name="nrow" min="1" required></label><br><br>
		<label>Empty Col Every N: <input type="number" name="ncol" min="1" required></label><br><br>
		<label>Rotation:
			<select name="rotation">
				<option value="sweep" selected>Isolated square blocks</option>
				<option value="center3x3">Surrounded 3x3 cells</option>
			</select>
		</label><br><br>
		<label>Output CSV Name: <input type="text" name="outputcsv" required></label><br><br>
		<input type="submit" value="Process">
	</form>
{{download}}</body>
</html>
"#;

/// Render the form, with a download link when an output was just produced.
pub fn render_form(output: Option<&str>) -> String {
    let download = match output {
        Some(name) => format!(
            "\t<h2>Download Output:</h2>\n\t<a href=\"/download?file={}\">{}</a>\n",
            escape_html(&encode_query_value(name)),
            escape_html(name)
        ),
        None => String::new(),
    };
    FORM_TEMPLATE.replace("{{download}}", &download)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
fn encode_query_value(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len());
    for byte in text.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}
