use axum::response::{Html, IntoResponse, Response};

pub async fn serve_home_page() -> Response {
    let html = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Transit Ticketing</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 0;
            background: #f5f5f5;
        }

        header {
            background: #1976d2;
            color: white;
            padding: 16px 24px;
            font-size: 1.2rem;
        }

        main {
            max-width: 500px;
            margin: 40px auto;
            background: white;
            border-radius: 8px;
            box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1);
            padding: 24px;
        }

        .status-ok {
            color: #4caf50;
            font-weight: 500;
        }

        .error {
            color: #f44336;
        }

        [hidden] {
            display: none;
        }
    </style>
</head>
<body>
    <header>Transit Ticketing and Trip Planner</header>

    <main>
        <h2>Backend Status</h2>

        <p id="loading">Checking backend...</p>

        <div id="health" hidden>
            <p><strong>Status:</strong> <span id="status" class="status-ok"></span></p>
            <p><strong>Version:</strong> <span id="version"></span></p>
            <p><strong>Database:</strong> <span id="database"></span></p>
            <p><strong>Storage:</strong> <span id="storage"></span></p>
        </div>

        <p id="unreachable" class="error" hidden>Backend unreachable</p>
    </main>

    <script>
        const loading = document.getElementById('loading');

        async function checkBackendHealth() {
            try {
                const response = await fetch('/health');
                if (!response.ok) {
                    throw new Error('Health check failed with status ' + response.status);
                }
                const health = await response.json();

                document.getElementById('status').textContent = health.status;
                document.getElementById('version').textContent = health.version;
                document.getElementById('database').textContent = health.services.database;
                document.getElementById('storage').textContent = health.services.storage;
                document.getElementById('health').hidden = false;
            } catch (error) {
                document.getElementById('unreachable').hidden = false;
            } finally {
                loading.hidden = true;
            }
        }

        checkBackendHealth();
    </script>
</body>
</html>"#;

    Html(html).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{StatusCode, header};
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_home_page_polls_health_once() {
        let response = serve_home_page().await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert_eq!(page.matches("fetch('/health')").count(), 1);
        assert!(!page.contains("setInterval"));
        assert!(page.contains("Backend unreachable"));
    }
}
