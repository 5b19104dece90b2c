//! Static boilerplate for generated Electron projects

pub const MAIN_JS: &str = r#"const { app, BrowserWindow } = require('electron');
const path = require('path');

function createWindow() {
  const win = new BrowserWindow({
    width: 800,
    height: 600,
    webPreferences: {
      nodeIntegration: true,
      contextIsolation: false,
      preload: path.join(__dirname, 'preload.js')
    }
  });

  win.loadFile('index.html');
}

app.whenReady().then(() => {
  createWindow();

  app.on('activate', () => {
    if (BrowserWindow.getAllWindows().length === 0) {
      createWindow();
    }
  });
});

app.on('window-all-closed', () => {
  if (process.platform !== 'darwin') {
    app.quit();
  }
});
"#;

pub const PRELOAD_JS: &str = r#"window.addEventListener('DOMContentLoaded', () => {
  for (const dependency of ['chrome', 'node', 'electron']) {
    const element = document.getElementById(`${dependency}-version`);
    if (element) {
      element.innerText = process.versions[dependency];
    }
  }
});
"#;

pub const STYLES_CSS: &str = r#"body {
    font-family: Arial, sans-serif;
    margin: 0;
    padding: 0;
    background-color: #f4f4f4;
    color: #333;
}

header {
    background: #35424a;
    color: #ffffff;
    padding: 10px 0;
    text-align: center;
}

main {
    padding: 20px;
}

footer {
    text-align: center;
    padding: 10px 0;
    background: #35424a;
    color: #ffffff;
    position: absolute;
    bottom: 0;
    width: 100%;
}
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{name}}</title>
    <link rel="stylesheet" href="styles.css">
</head>
<body>
    <header>
        <h1>Welcome to {{name}}</h1>
    </header>
    <main>
        <p>This is a basic project created by shellkit.</p>
        <p>
            Chrome <span id="chrome-version"></span>,
            Node.js <span id="node-version"></span>,
            Electron <span id="electron-version"></span>
        </p>
    </main>
    <footer>
        <p>Built with Electron.</p>
    </footer>
</body>
</html>
"#;

/// Render `index.html` with the project name as title and heading
pub fn index_html(project_name: &str) -> String {
    INDEX_HTML.replace("{{name}}", &escape_html(project_name))
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_html_uses_project_name() {
        let html = index_html("demo");
        assert!(html.contains("<title>demo</title>"));
        assert!(html.contains("<h1>Welcome to demo</h1>"));
        assert!(!html.contains("{{name}}"));
    }

    #[test]
    fn test_index_html_escapes_name() {
        let html = index_html("a<b>&c");
        assert!(html.contains("<title>a&lt;b&gt;&amp;c</title>"));
    }

    #[test]
    fn test_main_js_loads_index_and_preload() {
        assert!(MAIN_JS.contains("win.loadFile('index.html')"));
        assert!(MAIN_JS.contains("preload.js"));
    }
}
