#[cfg(test)]
mod tests {
    use recall_core::{RecallError, Role};
    use recall_store::*;
    use std::path::Path;

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    fn transcript(turns: &[(&str, &str)]) -> String {
        let mut out = String::from("Transcript export");
        for (role, text) in turns {
            out.push_str(&format!(
                "\n{role}:\nContent:\n[\n  {{\"type\": \"text\", \"text\": {}}}\n]\n",
                serde_json::to_string(text).unwrap()
            ));
        }
        out
    }

    fn fixture() -> (tempfile::TempDir, TranscriptStore) {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "2026-01-01-setup.txt",
            &transcript(&[
                ("Human", "Set up the Postgres replica"),
                ("Assistant", "Created the replica on db-2"),
            ]),
        );
        write(
            dir.path(),
            "2026-01-02-deploy.txt",
            &transcript(&[
                ("Human", "Deploy the API"),
                ("Assistant", "Deployed version 1.4 to production"),
            ]),
        );
        write(dir.path(), "journal.txt", "replica notes that are not a transcript");
        write(dir.path(), "notes.md", "replica");
        let store = TranscriptStore::new(dir.path());
        (dir, store)
    }

    // ── Listing ────────────────────────────────────────────────

    mod listing {
        use super::*;

        #[test]
        fn test_list_sorted_and_filtered() {
            let (_dir, store) = fixture();
            let names: Vec<_> = store.list().unwrap().into_iter().map(|t| t.name).collect();
            assert_eq!(names, vec!["2026-01-01-setup.txt", "2026-01-02-deploy.txt"]);
        }

        #[test]
        fn test_list_reports_size_and_path() {
            let (dir, store) = fixture();
            let list = store.list().unwrap();
            let expected = std::fs::metadata(dir.path().join("2026-01-01-setup.txt"))
                .unwrap()
                .len();
            assert_eq!(list[0].size, expected);
            assert_eq!(list[0].path, dir.path().join("2026-01-01-setup.txt"));
        }

        #[test]
        fn test_list_empty_directory() {
            let dir = tempfile::tempdir().unwrap();
            let store = TranscriptStore::new(dir.path());
            assert!(store.list().unwrap().is_empty());
        }

        #[test]
        fn test_list_missing_directory_is_empty() {
            let store = TranscriptStore::new("/nonexistent/transcripts");
            assert!(store.list().unwrap().is_empty());
        }

        #[test]
        fn test_list_skips_subdirectories_and_hidden_files() {
            let (dir, store) = fixture();
            std::fs::create_dir(dir.path().join("archive.txt")).unwrap();
            write(dir.path(), ".swap.txt", "x");
            assert_eq!(store.list().unwrap().len(), 2);
        }

        #[test]
        fn test_custom_extension_and_exclude() {
            let dir = tempfile::tempdir().unwrap();
            write(dir.path(), "a.log", "x");
            write(dir.path(), "index.log", "x");
            write(dir.path(), "b.txt", "x");
            let store = TranscriptStore::new(dir.path())
                .with_extension(".log")
                .with_exclude(vec!["index.log".into()]);
            let names: Vec<_> = store.list().unwrap().into_iter().map(|t| t.name).collect();
            assert_eq!(names, vec!["a.log"]);
        }

        #[test]
        fn test_current_is_last_by_name() {
            let (_dir, store) = fixture();
            let current = store.current().unwrap().unwrap();
            assert_eq!(current.name, "2026-01-02-deploy.txt");
        }

        #[test]
        fn test_current_none_when_empty() {
            let dir = tempfile::tempdir().unwrap();
            let store = TranscriptStore::new(dir.path());
            assert!(store.current().unwrap().is_none());
        }
    }

    // ── Reading ────────────────────────────────────────────────

    mod reading {
        use super::*;

        #[test]
        fn test_read_by_name() {
            let (_dir, store) = fixture();
            let content = store.read("2026-01-01-setup.txt").unwrap();
            assert!(content.contains("Postgres replica"));
        }

        #[test]
        fn test_read_missing_file() {
            let (_dir, store) = fixture();
            let err = store.read("nope.txt").unwrap_err();
            assert!(matches!(err, RecallError::TranscriptNotFound(ref n) if n == "nope.txt"));
        }

        #[test]
        fn test_read_rejects_path_escape() {
            let (_dir, store) = fixture();
            assert!(matches!(
                store.read("../etc/passwd"),
                Err(RecallError::InvalidName(_))
            ));
            assert!(matches!(
                store.read("/etc/passwd"),
                Err(RecallError::InvalidName(_))
            ));
            assert!(matches!(store.read(""), Err(RecallError::InvalidName(_))));
        }

        #[test]
        fn test_read_decodes_unicode_escapes() {
            let dir = tempfile::tempdir().unwrap();
            write(dir.path(), "a.txt", "na\\u00efve caf\\u00e9");
            let store = TranscriptStore::new(dir.path());
            assert_eq!(store.read("a.txt").unwrap(), "naïve café");
        }

        #[test]
        fn test_read_invalid_utf8_is_lossy() {
            let dir = tempfile::tempdir().unwrap();
            std::fs::write(dir.path().join("a.txt"), b"ok \xff end").unwrap();
            let store = TranscriptStore::new(dir.path());
            let content = store.read("a.txt").unwrap();
            assert!(content.starts_with("ok "));
            assert!(content.contains('\u{FFFD}'));
        }

        #[test]
        fn test_tail_lines() {
            assert_eq!(tail_lines("a\nb\nc\n", 2), "b\nc");
            assert_eq!(tail_lines("a\nb", 10), "a\nb");
            assert_eq!(tail_lines("a\nb", 0), "a\nb");
        }

        #[test]
        fn test_tail_lines_keeps_crlf() {
            assert_eq!(tail_lines("a\r\nb\r\nc\r\n", 2), "b\r\nc\r");
            assert_eq!(tail_lines("a\n\nb", 2), "\nb");
        }
    }

    // ── Combining ──────────────────────────────────────────────

    mod combining {
        use super::*;

        #[test]
        fn test_combine_all_contains_every_transcript() {
            let (_dir, store) = fixture();
            let combined = store.combine_all(80).unwrap();
            for info in store.list().unwrap() {
                let single = store.read(&info.name).unwrap();
                assert!(combined.contains(&single));
                assert!(combined.contains(&format!("=== FILE: {} ===", info.name)));
            }
            assert!(!combined.contains("journal"));
        }

        #[test]
        fn test_combine_all_banner_layout() {
            let dir = tempfile::tempdir().unwrap();
            write(dir.path(), "a.txt", "body");
            let store = TranscriptStore::new(dir.path());
            let rule = "=".repeat(5);
            assert_eq!(
                store.combine_all(5).unwrap(),
                format!("\n{rule}\n=== FILE: a.txt ===\n{rule}\n\nbody")
            );
        }

        #[test]
        fn test_combine_all_in_name_order() {
            let (_dir, store) = fixture();
            let combined = store.combine_all(80).unwrap();
            let first = combined.find("2026-01-01-setup.txt").unwrap();
            let second = combined.find("2026-01-02-deploy.txt").unwrap();
            assert!(first < second);
        }

        #[test]
        fn test_combine_all_empty_store() {
            let dir = tempfile::tempdir().unwrap();
            let store = TranscriptStore::new(dir.path());
            assert_eq!(store.combine_all(80).unwrap(), "");
        }
    }

    // ── Searching ──────────────────────────────────────────────

    mod searching {
        use super::*;

        #[test]
        fn test_search_present_keyword_non_empty() {
            let (_dir, store) = fixture();
            let results = store.search("replica", &SearchOptions::default()).unwrap();
            assert_eq!(results.len(), 1);
            assert_eq!(results[0].file, "2026-01-01-setup.txt");
            assert_eq!(results[0].matches.len(), 2);
        }

        #[test]
        fn test_search_absent_keyword_empty() {
            let (_dir, store) = fixture();
            let results = store.search("kubernetes", &SearchOptions::default()).unwrap();
            assert!(results.is_empty());
        }

        #[test]
        fn test_search_case_insensitive_by_default() {
            let (_dir, store) = fixture();
            let results = store.search("PRODUCTION", &SearchOptions::default()).unwrap();
            assert_eq!(results.len(), 1);
            assert_eq!(results[0].file, "2026-01-02-deploy.txt");
        }

        #[test]
        fn test_search_case_sensitive_option() {
            let (_dir, store) = fixture();
            let opts = SearchOptions {
                case_sensitive: true,
                ..Default::default()
            };
            assert!(store.search("PRODUCTION", &opts).unwrap().is_empty());
            assert_eq!(store.search("Deploy", &opts).unwrap().len(), 1);
        }

        #[test]
        fn test_search_spans_multiple_files_in_order() {
            let (_dir, store) = fixture();
            let results = store.search("the", &SearchOptions::default()).unwrap();
            let files: Vec<_> = results.iter().map(|r| r.file.as_str()).collect();
            assert_eq!(files, vec!["2026-01-01-setup.txt", "2026-01-02-deploy.txt"]);
        }

        #[test]
        fn test_search_caps_matches_per_file() {
            let dir = tempfile::tempdir().unwrap();
            let body = (0..25).map(|i| format!("error {i}")).collect::<Vec<_>>().join("\n");
            write(dir.path(), "a.txt", &body);
            let store = TranscriptStore::new(dir.path());
            let results = store.search("error", &SearchOptions::default()).unwrap();
            assert_eq!(results[0].matches.len(), 10);
            assert_eq!(results[0].matches[0].line, 1);
            assert_eq!(results[0].matches[9].text, "error 9");
        }

        #[test]
        fn test_search_truncates_snippets() {
            let dir = tempfile::tempdir().unwrap();
            write(dir.path(), "a.txt", &format!("needle {}", "x".repeat(500)));
            let store = TranscriptStore::new(dir.path());
            let results = store.search("needle", &SearchOptions::default()).unwrap();
            assert_eq!(results[0].matches[0].text.chars().count(), 200);
        }

        #[test]
        fn test_search_ignores_journal() {
            let (_dir, store) = fixture();
            let results = store.search("not a transcript", &SearchOptions::default()).unwrap();
            assert!(results.is_empty());
        }

        #[test]
        fn test_search_empty_query_matches_nothing() {
            let (_dir, store) = fixture();
            assert!(store.search("", &SearchOptions::default()).unwrap().is_empty());
        }

        #[test]
        fn test_search_matches_decoded_text() {
            let dir = tempfile::tempdir().unwrap();
            write(dir.path(), "a.txt", "menu: cr\\u00e8me br\\u00fbl\\u00e9e");
            let store = TranscriptStore::new(dir.path());
            let results = store.search("crème", &SearchOptions::default()).unwrap();
            assert_eq!(results.len(), 1);
        }
    }

    // ── Message extraction ─────────────────────────────────────

    mod messages {
        use super::*;

        #[test]
        fn test_extract_roles_and_text() {
            let content = transcript(&[("Human", "  hi  "), ("Assistant", "hello")]);
            let messages = extract_messages(&content);
            assert_eq!(messages.len(), 2);
            assert_eq!(messages[0].role, Role::Human);
            assert_eq!(messages[0].text, "hi");
            assert_eq!(messages[1].role, Role::Assistant);
        }

        #[test]
        fn test_extract_skips_non_text_and_blank_blocks() {
            let content = "x\nAssistant:\nContent:\n[\n  {\"type\": \"tool_use\", \"name\": \"bash\"},\n  {\"type\": \"text\", \"text\": \" \"},\n  {\"type\": \"text\", \"text\": \"done\"},\n  42\n]\n";
            let messages = extract_messages(content);
            assert_eq!(messages.len(), 1);
            assert_eq!(messages[0].text, "done");
        }

        #[test]
        fn test_extract_skips_malformed_json() {
            let content = "x\nHuman:\nContent:\n[\n  {\"type\": \"text\", \"text\": broken}\n]\n\nAssistant:\nContent:\n[\n  {\"type\": \"text\", \"text\": \"still here\"}\n]\n";
            let messages = extract_messages(content);
            assert_eq!(messages.len(), 1);
            assert_eq!(messages[0].text, "still here");
        }

        #[test]
        fn test_extract_requires_preceding_newline() {
            let content = "Human:\nContent:\n[\n  {\"type\": \"text\", \"text\": \"orphan\"}\n]\n";
            assert!(extract_messages(content).is_empty());
        }

        #[test]
        fn test_extract_from_combined_output() {
            let (_dir, store) = fixture();
            let combined = store.combine_all(80).unwrap();
            let messages = extract_messages(&combined);
            assert_eq!(messages.len(), 4);
            assert_eq!(messages[3].text, "Deployed version 1.4 to production");
        }

        #[test]
        fn test_format_messages() {
            let content = transcript(&[("Human", "why?"), ("Assistant", "a long answer")]);
            let rendered = format_messages(&extract_messages(&content), Some(6));
            assert_eq!(rendered, "\n[HUMAN]:\nwhy?\n\n\n[CLAUDE]:\na long...\n");
        }
    }
}
