use rwcache::ConcurrentMap;
use std::process::ExitCode;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const ENTRIES: i64 = 30;
const READ_DELAY: Duration = Duration::from_millis(100);

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cache = Arc::new(ConcurrentMap::with_capacity(ENTRIES as usize));

    let writer = {
        let cache = Arc::clone(&cache);
        thread::spawn(move || {
            for i in 0..ENTRIES {
                cache.set(i, i);
            }
        })
    };

    let reader = {
        let cache = Arc::clone(&cache);
        thread::spawn(move || {
            for i in 0..ENTRIES {
                // give the writer a head start
                thread::sleep(READ_DELAY);
                let value = cache.get(i);
                println!("value of map[{i}] is {value}");
            }
        })
    };

    let mut code = ExitCode::SUCCESS;
    for (name, handle) in [("writer", writer), ("reader", reader)] {
        if handle.join().is_err() {
            log::error!("{name} thread panicked");
            code = ExitCode::FAILURE;
        }
    }

    log::info!("{:?}", cache.stats());
    code
}
