use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;

use tradedesk_loader_csv::CsvLoader;

fn main() {
    let port = std::env::var("PORT").unwrap_or_else(|_| "8081".to_string());
    let asset_file =
        std::env::var("TRADEDESK_ASSET_FILE").unwrap_or_else(|_| "assets.csv".to_string());
    let trade_file =
        std::env::var("TRADEDESK_TRADE_FILE").unwrap_or_else(|_| "trades.csv".to_string());

    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr).unwrap_or_else(|e| {
        eprintln!("failed to bind {addr}: {e}");
        std::process::exit(1);
    });

    eprintln!("csv loader listening on {addr}, serving {asset_file} + {trade_file}");

    let loader = CsvLoader::new(&asset_file, &trade_file);

    for stream in listener.incoming() {
        let mut stream = match stream {
            Ok(s) => s,
            Err(e) => {
                eprintln!("accept error: {e}");
                continue;
            }
        };

        // Drain the request headers; the response ignores them
        let reader = BufReader::new(&stream);
        for line in reader.lines() {
            match line {
                Ok(l) if l.is_empty() => break,
                Ok(_) => continue,
                Err(_) => break,
            }
        }

        let (status, body) = match loader.contracts() {
            Ok(contracts) => {
                eprintln!("serving {} contracts", contracts.len());
                ("200 OK", serde_json::to_vec(&contracts).unwrap())
            }
            Err(e) => {
                eprintln!("load error: {e}");
                let body = serde_json::json!({ "error": e.to_string() });
                ("500 Internal Server Error", serde_json::to_vec(&body).unwrap())
            }
        };

        let header = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );

        let _ = stream.write_all(header.as_bytes());
        let _ = stream.write_all(&body);
    }
}
