use std::io::Read;

fn main() {
    systemd_journal_logger::JournalLog::new()
        .unwrap()
        .with_syslog_identifier("later-classify-check".to_string())
        .install()
        .unwrap();

    // Parse CLI flags
    let args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    log::set_max_level(if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });

    // Remaining arguments are the text; with none, read stdin.
    let words: Vec<String> = args.into_iter().filter(|a| !a.starts_with('-')).collect();
    let text = if words.is_empty() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .expect("Failed to read stdin");
        buf
    } else {
        words.join(" ")
    };

    let capture = later_capture::capture::QuickCapture::default();
    let suggestion = capture.suggest(&text);

    if as_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&suggestion).expect("Failed to encode suggestion")
        );
        return;
    }

    println!("=== Quick Capture Classification ===\n");
    println!(
        "Input: {} chars, {} lines",
        text.chars().count(),
        text.lines().count()
    );
    println!(
        "\nType: {} (confidence {:.2}{})",
        suggestion.content_type,
        suggestion.confidence,
        if suggestion.auto_apply {
            ", auto-apply"
        } else {
            ""
        }
    );

    println!("\nConfidence per category:");
    for candidate in later_capture::core::content_type::ContentType::ALL {
        println!(
            "  {:<5} {:.2}",
            candidate.as_str(),
            capture.classifier().confidence(&text, candidate)
        );
    }

    if let Some(due) = suggestion.due_date {
        match due.time {
            Some(time) => println!("\nDue date: {} {}", due.date, time.format("%H:%M")),
            None => println!("\nDue date: {}", due.date),
        }
    }

    if !suggestion.items.is_empty() {
        println!("\nItems ({}):", suggestion.items.len());
        for (i, item) in suggestion.items.iter().enumerate() {
            println!("  {}. {}", i + 1, item);
        }
    }
}
