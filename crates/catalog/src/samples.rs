use crate::{import::parse_line, record::FileRecord};

/// Seed data in the bulk-import line format.
const SEED_LINES: [&str; 5] = [
    "Report.pdf,C:/Documents,10.05.2023,200KB,work,project",
    "Image.jpg,C:/Pictures,15.11.2022,1500KB,vacation,family",
    "Notes.txt,C:/Documents,01.01.2021,50KB,work,personal",
    "Video.mp4,C:/Videos,20.02.2020,500000KB,work",
    "Podcast.mp3,C:/Music,05.04.2021,100000KB,project",
];

/// Starter records for a fresh session.
pub fn sample_records() -> Vec<FileRecord> {
    SEED_LINES
        .iter()
        .filter_map(|line| parse_line(line).ok().flatten())
        .collect()
}
