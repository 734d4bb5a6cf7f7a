use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::Mutex;
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpResponse, HttpServer, web};
use putgen::{ConfigBuilder, HttpTransport, Task, run};

type Seen = web::Data<Mutex<Vec<Task>>>;

async fn accept(seen: Seen, body: web::Json<Task>) -> HttpResponse {
    seen.lock().unwrap().push(body.into_inner());
    HttpResponse::Ok().body("ok")
}

fn stub() -> (SocketAddr, ServerHandle, Seen) {
    let seen: Seen = web::Data::new(Mutex::new(Vec::new()));
    let data = seen.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/", web::put().to(accept))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    tokio::spawn(server);

    (addr, handle, seen)
}

fn keys_in(lines: &[&str]) -> HashSet<u64> {
    lines
        .iter()
        .map(|l| {
            let rest = l.split("key=").nth(1).unwrap();
            rest.split(';').next().unwrap().parse().unwrap()
        })
        .collect()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn every_put_is_acknowledged() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (addr, handle, seen) = stub();

    let config = ConfigBuilder::new()
        .with_endpoint(format!("http://{addr}/"))
        .with_count(5)
        .with_workers(2)
        .with_delay(Duration::from_millis(10))
        .build()
        .unwrap();

    let mut out = Vec::new();
    let summary = run(&config, HttpTransport::new(config.endpoint()), &mut out)
        .await
        .unwrap();
    handle.stop(true).await;

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[5], "All 5 objects have been sent.");

    let outcomes = &lines[..5];
    assert!(outcomes.iter().all(|l| l.contains("Response: 200 - ok")));
    assert_eq!(keys_in(outcomes), (1..=5).collect::<HashSet<u64>>());
    assert_eq!(summary.sent, 5);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 5);
    for task in seen.iter() {
        assert!((1..=100).contains(&task.value.column1));
        assert!((100..=1000).contains(&task.value.column5));
    }
}

#[tokio::test]
async fn refused_connections_are_reported() {
    let _ = env_logger::builder().is_test(true).try_init();

    // nothing can ever listen on port 0, so every connect fails
    let config = ConfigBuilder::new()
        .with_endpoint("http://127.0.0.1:0/")
        .with_count(3)
        .with_workers(1)
        .with_delay(Duration::ZERO)
        .build()
        .unwrap();

    let mut out = Vec::new();
    let summary = run(&config, HttpTransport::new(config.endpoint()), &mut out)
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);

    let outcomes = &lines[..3];
    assert!(outcomes.iter().all(|l| l.contains("Error sending object")));
    assert_eq!(keys_in(outcomes), (1..=3).collect::<HashSet<u64>>());
    assert_eq!(summary.failed, 3);
    assert_eq!(summary.sent, 0);
}
