use axum::response::{Html, IntoResponse};

// Serve the single-page UI: a URL field, a logo picker, and the preview
// with a download action. Generation happens server-side via /api/generate.
pub async fn serve_index() -> impl IntoResponse {
    let html = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>QR Code Generator</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, 'Open Sans', 'Helvetica Neue', sans-serif;
            max-width: 640px;
            margin: 0 auto;
            padding: 20px;
            color: #333;
        }
        h1 {
            color: #2c3e50;
            text-align: center;
            margin-bottom: 4px;
        }
        .subtitle {
            text-align: center;
            color: #666;
            margin-bottom: 24px;
        }
        .card {
            border: 1px solid #ddd;
            border-radius: 8px;
            padding: 20px;
            box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
            margin-bottom: 20px;
        }
        label {
            display: block;
            font-weight: 600;
            margin-bottom: 6px;
        }
        input[type='url'] {
            width: 100%;
            padding: 10px;
            border: 1px solid #ccc;
            border-radius: 4px;
            box-sizing: border-box;
            font-size: 16px;
            margin-bottom: 16px;
        }
        .button {
            background-color: #3498db;
            color: white;
            border: none;
            padding: 12px 18px;
            border-radius: 4px;
            cursor: pointer;
            font-size: 16px;
            width: 100%;
        }
        .button:hover {
            background-color: #2980b9;
        }
        .button:disabled {
            background-color: #95a5a6;
            cursor: not-allowed;
        }
        .button.secondary {
            background-color: #27ae60;
        }
        .button.secondary:hover {
            background-color: #1e8449;
        }
        .logo-row {
            display: flex;
            align-items: center;
            gap: 12px;
            margin-bottom: 16px;
        }
        .logo-row img {
            width: 48px;
            height: 48px;
            object-fit: contain;
            border: 1px solid #ddd;
            border-radius: 4px;
        }
        #file-input {
            display: none;
        }
        .file-button {
            background-color: #ecf0f1;
            color: #333;
            border: 1px solid #ccc;
            padding: 10px 16px;
            border-radius: 4px;
            cursor: pointer;
            font-size: 15px;
        }
        .preview {
            text-align: center;
            display: none;
        }
        .preview img {
            max-width: 100%;
            border: 1px solid #ddd;
            border-radius: 8px;
            margin-bottom: 16px;
        }
        .notice {
            color: #c0392b;
            text-align: center;
            margin-top: 12px;
            display: none;
        }
        .server-info {
            text-align: center;
            color: #888;
            font-size: 13px;
        }
    </style>
</head>
<body>
    <h1>QR Code Generator</h1>
    <p class="subtitle">Create custom QR codes with your logo</p>

    <div class="card">
        <label for="url-input">Enter URL</label>
        <input id="url-input" type="url" placeholder="https://example.com">

        <label>Upload Logo</label>
        <div class="logo-row">
            <input id="file-input" type="file" accept="image/*">
            <button type="button" class="file-button" id="choose-file-btn">Choose File</button>
            <img id="logo-preview" alt="Logo preview" style="display: none;">
            <span id="logo-name"></span>
        </div>

        <button type="button" class="button" id="generate-btn" disabled>Generate QR Code</button>
        <p class="notice" id="notice"></p>
    </div>

    <div class="card preview" id="preview-card">
        <img id="result-img" alt="Generated QR code">
        <button type="button" class="button secondary" id="download-btn">Download QR Code</button>
    </div>

    <p class="server-info" id="server-info"></p>

    <script>
        const urlInput = document.getElementById('url-input');
        const fileInput = document.getElementById('file-input');
        const chooseFileBtn = document.getElementById('choose-file-btn');
        const logoPreview = document.getElementById('logo-preview');
        const logoName = document.getElementById('logo-name');
        const generateBtn = document.getElementById('generate-btn');
        const notice = document.getElementById('notice');
        const previewCard = document.getElementById('preview-card');
        const resultImg = document.getElementById('result-img');
        const downloadBtn = document.getElementById('download-btn');

        // Only one generation may be in flight at a time.
        let isGenerating = false;
        let resultUrl = null;

        function updateGenerateButton() {
            const ready = urlInput.value.length > 0 && fileInput.files.length > 0;
            generateBtn.disabled = isGenerating || !ready;
            generateBtn.textContent = isGenerating ? 'Generating...' : 'Generate QR Code';
        }

        function showNotice(message) {
            notice.textContent = message;
            notice.style.display = 'block';
        }

        chooseFileBtn.addEventListener('click', () => fileInput.click());

        fileInput.addEventListener('change', () => {
            const file = fileInput.files[0];
            if (file) {
                logoPreview.src = URL.createObjectURL(file);
                logoPreview.style.display = 'inline';
                logoName.textContent = file.name;
            }
            updateGenerateButton();
        });

        urlInput.addEventListener('input', updateGenerateButton);

        generateBtn.addEventListener('click', async () => {
            if (isGenerating) return;
            const url = urlInput.value;
            const file = fileInput.files[0];
            if (!url || !file) {
                showNotice('Please enter a URL and upload a logo');
                return;
            }

            isGenerating = true;
            notice.style.display = 'none';
            updateGenerateButton();

            try {
                const form = new FormData();
                form.append('url', url);
                form.append('logo', file);

                const response = await fetch('/api/generate', { method: 'POST', body: form });
                if (!response.ok) {
                    let message = 'Failed to generate QR code';
                    try {
                        const body = await response.json();
                        if (body.error) message = body.error;
                    } catch (_) { /* keep the generic message */ }
                    // A failed attempt leaves the previous result untouched.
                    showNotice(message);
                    return;
                }

                const blob = await response.blob();
                if (resultUrl) URL.revokeObjectURL(resultUrl);
                resultUrl = URL.createObjectURL(blob);
                resultImg.src = resultUrl;
                previewCard.style.display = 'block';
            } catch (err) {
                console.error('Error generating QR code:', err);
                showNotice('Failed to generate QR code');
            } finally {
                isGenerating = false;
                updateGenerateButton();
            }
        });

        downloadBtn.addEventListener('click', () => {
            if (!resultUrl) return;
            const link = document.createElement('a');
            link.href = resultUrl;
            link.download = 'qr-code-with-logo.png';
            link.click();
        });

        fetch('/api/info')
            .then((r) => r.json())
            .then((info) => {
                document.getElementById('server-info').textContent =
                    'Served by ' + info.name + ' at ' + info.ip + ':' + info.port;
            })
            .catch(() => { /* info line is cosmetic */ });
    </script>
</body>
</html>"#;

    Html(html)
}
