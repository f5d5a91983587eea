use std::borrow::Cow;
use bip_bencode::{ben_int, ben_map, BMutAccess};
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::impls::announce_response::bencode_int;
use crate::tracker::structs::scrape_response::ScrapeResponse;

impl ScrapeResponse {
    /// Bencodes `{"files": {<raw info hash>: {"complete", "downloaded", "incomplete"}}}`.
    pub fn encode(&self) -> Result<Vec<u8>, TrackerError>
    {
        let mut files = ben_map!();
        {
            let files_mut = files.dict_mut()
                .ok_or_else(|| TrackerError::Encoding(String::from("scrape files is not a dictionary")))?;
            for (info_hash, counts) in &self.files {
                files_mut.insert(Cow::from(info_hash.0.to_vec()), ben_map! {
                    "complete" => ben_int!(bencode_int(counts.seeds, "complete")?),
                    "downloaded" => ben_int!(bencode_int(counts.completed, "downloaded")?),
                    "incomplete" => ben_int!(bencode_int(counts.peers, "incomplete")?)
                });
            }
        }

        Ok(ben_map! {
            "files" => files
        }.encode())
    }
}
