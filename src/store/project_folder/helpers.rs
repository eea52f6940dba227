// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stylobate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylobate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Wire format mirror of the model. Block order in the file is block order in
// the layout, so adjacency is positional here exactly as it is in memory.

#[derive(Debug, Serialize, Deserialize)]
struct LayoutJson {
    #[serde(default = "default_schema")]
    schema: u32,
    blocks: Vec<BlockJson>,
    #[serde(default)]
    stylobates: Vec<StylobateJson>,
    #[serde(default)]
    underground_links: Vec<PairJson>,
    #[serde(default)]
    parking_block_ids: Vec<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct BlockJson {
    block_id: u32,
    name: String,
    bottom_floor: i32,
    top_floor: i32,
    #[serde(default)]
    technical_floors: Vec<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StylobateJson {
    stylobate_id: u32,
    name: String,
    from_block_id: u32,
    to_block_id: u32,
    floors: i32,
}

#[derive(Debug, Serialize, Deserialize)]
struct PairJson {
    from_block_id: u32,
    to_block_id: u32,
}

fn default_schema() -> u32 {
    LAYOUT_SCHEMA
}

fn layout_to_json(layout: &Layout) -> LayoutJson {
    let blocks = layout
        .blocks()
        .blocks()
        .iter()
        .map(|block| BlockJson {
            block_id: block.id().value(),
            name: block.name().to_owned(),
            bottom_floor: block.bottom_floor(),
            top_floor: block.top_floor(),
            technical_floors: block.technical_floors().iter().copied().collect(),
        })
        .collect();

    let stylobates = layout
        .connections()
        .stylobates()
        .iter()
        .map(|(pair, stylobate)| StylobateJson {
            stylobate_id: stylobate.id().value(),
            name: stylobate.name().to_owned(),
            from_block_id: pair.from_block_id().value(),
            to_block_id: pair.to_block_id().value(),
            floors: stylobate.floors(),
        })
        .collect();

    let underground_links = layout
        .connections()
        .underground_links()
        .iter()
        .map(|pair| PairJson {
            from_block_id: pair.from_block_id().value(),
            to_block_id: pair.to_block_id().value(),
        })
        .collect();

    let parking_block_ids = layout
        .connections()
        .parking_members()
        .iter()
        .map(|id| id.value())
        .collect();

    LayoutJson {
        schema: LAYOUT_SCHEMA,
        blocks,
        stylobates,
        underground_links,
        parking_block_ids,
    }
}

fn layout_from_json(path: &Path, json: LayoutJson) -> Result<Layout, StoreError> {
    if json.schema != LAYOUT_SCHEMA {
        return Err(StoreError::UnsupportedSchema {
            path: path.to_path_buf(),
            schema: json.schema,
        });
    }
    if json.blocks.is_empty() {
        return Err(StoreError::EmptyLayout {
            path: path.to_path_buf(),
        });
    }

    let mut blocks = Vec::with_capacity(json.blocks.len());
    let mut index_by_id = BTreeMap::new();
    for (index, block_json) in json.blocks.iter().enumerate() {
        if index_by_id.insert(block_json.block_id, index).is_some() {
            return Err(StoreError::DuplicateBlockId {
                path: path.to_path_buf(),
                block_id: block_json.block_id,
            });
        }
        if block_json.top_floor < block_json.bottom_floor {
            return Err(StoreError::InvalidFloorRange {
                path: path.to_path_buf(),
                block_id: block_json.block_id,
                bottom_floor: block_json.bottom_floor,
                top_floor: block_json.top_floor,
            });
        }

        let mut technical = BTreeSet::new();
        for &floor in &block_json.technical_floors {
            let in_range = floor >= block_json.bottom_floor && floor <= block_json.top_floor;
            if floor <= 0 || !in_range {
                return Err(StoreError::InvalidTechnicalFloor {
                    path: path.to_path_buf(),
                    block_id: block_json.block_id,
                    floor,
                });
            }
            technical.insert(floor);
        }

        let mut block = Block::new_with(
            BlockId::new(block_json.block_id),
            block_json.name.clone(),
            block_json.bottom_floor,
            block_json.top_floor,
        );
        block.set_technical_floors(technical);
        blocks.push(block);
    }

    let mut connections = ConnectionStore::default();

    for stylobate_json in &json.stylobates {
        let from_index = block_index(
            path,
            &index_by_id,
            "stylobates[].from_block_id",
            stylobate_json.from_block_id,
        )?;
        let to_index = block_index(
            path,
            &index_by_id,
            "stylobates[].to_block_id",
            stylobate_json.to_block_id,
        )?;
        if from_index + 1 != to_index {
            return Err(StoreError::NotAdjacent {
                path: path.to_path_buf(),
                field: "stylobates[]",
                from_block_id: stylobate_json.from_block_id,
                to_block_id: stylobate_json.to_block_id,
            });
        }
        if stylobate_json.floors < 1 {
            return Err(StoreError::InvalidStylobateFloors {
                path: path.to_path_buf(),
                from_block_id: stylobate_json.from_block_id,
                to_block_id: stylobate_json.to_block_id,
                floors: stylobate_json.floors,
            });
        }

        let pair = AdjacentPair::new(
            BlockId::new(stylobate_json.from_block_id),
            BlockId::new(stylobate_json.to_block_id),
        );
        if connections.stylobate(pair).is_some() {
            return Err(StoreError::DuplicatePair {
                path: path.to_path_buf(),
                field: "stylobates[]",
                from_block_id: stylobate_json.from_block_id,
                to_block_id: stylobate_json.to_block_id,
            });
        }
        connections.insert_stylobate(
            pair,
            Stylobate::new(
                StylobateId::new(stylobate_json.stylobate_id),
                stylobate_json.name.clone(),
                stylobate_json.floors,
            ),
        );
    }

    for link_json in &json.underground_links {
        let from_index = block_index(
            path,
            &index_by_id,
            "underground_links[].from_block_id",
            link_json.from_block_id,
        )?;
        let to_index = block_index(
            path,
            &index_by_id,
            "underground_links[].to_block_id",
            link_json.to_block_id,
        )?;
        if from_index + 1 != to_index {
            return Err(StoreError::NotAdjacent {
                path: path.to_path_buf(),
                field: "underground_links[]",
                from_block_id: link_json.from_block_id,
                to_block_id: link_json.to_block_id,
            });
        }

        let pair = AdjacentPair::new(
            BlockId::new(link_json.from_block_id),
            BlockId::new(link_json.to_block_id),
        );
        if connections.has_underground(pair) {
            return Err(StoreError::DuplicatePair {
                path: path.to_path_buf(),
                field: "underground_links[]",
                from_block_id: link_json.from_block_id,
                to_block_id: link_json.to_block_id,
            });
        }
        connections.insert_underground(pair);
    }

    for &block_id in &json.parking_block_ids {
        block_index(path, &index_by_id, "parking_block_ids[]", block_id)?;
        connections.insert_parking_member(BlockId::new(block_id));
    }

    Ok(Layout::from_parts(BlockStore::from_blocks(blocks), connections))
}

fn block_index(
    path: &Path,
    index_by_id: &BTreeMap<u32, usize>,
    field: &'static str,
    block_id: u32,
) -> Result<usize, StoreError> {
    index_by_id
        .get(&block_id)
        .copied()
        .ok_or_else(|| StoreError::UnknownBlockId {
            path: path.to_path_buf(),
            field,
            block_id,
        })
}

/// Writes `contents` to `path` via a same-directory temp file and rename.
/// Refuses to follow a symlink at the destination.
fn write_atomic(
    path: &Path,
    contents: &[u8],
    durability: WriteDurability,
) -> Result<(), StoreError> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            return Err(StoreError::SymlinkRefused {
                path: path.to_path_buf(),
            });
        }
        Ok(_) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    }

    let Some(parent) = path.parent() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("write target has no parent directory"),
        });
    };
    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("write target has no file name"),
        });
    };

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or(0);
    let tmp_path = parent.join(format!(
        ".stylobate.tmp.{}.{nanos}",
        file_name.to_string_lossy()
    ));

    let mut tmp_file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;

    let write_result = tmp_file
        .write_all(contents)
        .and_then(|()| {
            if durability == WriteDurability::Durable {
                tmp_file.sync_all()
            } else {
                Ok(())
            }
        })
        .and_then(|()| rename_overwrite(&tmp_path, path));

    if let Err(source) = write_result {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    if durability == WriteDurability::Durable {
        sync_dir(parent);
    }

    Ok(())
}

fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(_) => {
                // Windows rename does not overwrite. Remove the target and retry.
                let _ = fs::remove_file(to);
                fs::rename(from, to)
            }
        }
    }
    #[cfg(not(windows))]
    {
        fs::rename(from, to)
    }
}

#[cfg(unix)]
fn sync_dir(dir: &Path) {
    if let Ok(handle) = fs::File::open(dir) {
        let _ = handle.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) {}
