use crate::error::ViewerError;
use crate::models::Item;
use itertools::Itertools;

/// A page worth of items; ids start at 1 and follow list order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<T = Item> {
    pub id: usize,
    pub items: Vec<T>,
}

/// Split `items` into consecutive chunks of `size`; the last chunk may be shorter
pub fn chunk<T>(items: Vec<T>, size: usize) -> Result<Vec<Chunk<T>>, ViewerError> {
    if size == 0 {
        return Err(ViewerError::Config(
            "items per page must be greater than zero".to_string(),
        ));
    }

    let groups = items.into_iter().chunks(size);
    let chunks = (&groups)
        .into_iter()
        .enumerate()
        .map(|(index, group)| Chunk {
            id: index + 1,
            items: group.collect(),
        })
        .collect();

    Ok(chunks)
}

/// Number of chunks `chunk` produces for `item_count` items
pub fn page_count(item_count: usize, size: usize) -> usize {
    if size == 0 {
        0
    } else {
        item_count.div_ceil(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_items_page_size_four() {
        let items: Vec<u32> = (0..10).collect();
        let chunks = chunk(items, 4).unwrap();

        let sizes: Vec<usize> = chunks.iter().map(|c| c.items.len()).collect();
        assert_eq!(sizes, vec![4, 4, 2]);
        assert_eq!(chunks.len(), 3);
        assert_eq!(page_count(10, 4), 3);
    }

    #[test]
    fn test_ids_are_contiguous_from_one() {
        let chunks = chunk((0..7).collect::<Vec<u32>>(), 2).unwrap();
        let ids: Vec<usize> = chunks.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_chunks_partition_input() {
        for n in 0..30usize {
            for size in 1..8usize {
                let items: Vec<usize> = (0..n).collect();
                let chunks = chunk(items.clone(), size).unwrap();

                assert_eq!(chunks.len(), n.div_ceil(size), "n={} size={}", n, size);
                assert_eq!(chunks.len(), page_count(n, size));
                if let Some((last, rest)) = chunks.split_last() {
                    assert!(rest.iter().all(|c| c.items.len() == size));
                    assert!(!last.items.is_empty() && last.items.len() <= size);
                }

                let rebuilt: Vec<usize> = chunks.into_iter().flat_map(|c| c.items).collect();
                assert_eq!(rebuilt, items);
            }
        }
    }

    #[test]
    fn test_zero_size_is_config_error() {
        let result = chunk(vec![1, 2, 3], 0);
        match result {
            Err(ViewerError::Config(msg)) => {
                assert_eq!(msg, "items per page must be greater than zero");
            }
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_empty_list_has_no_chunks() {
        let chunks = chunk(Vec::<Item>::new(), 4).unwrap();
        assert!(chunks.is_empty());
    }
}
