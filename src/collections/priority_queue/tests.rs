use super::*;
use crate::collections::binary_heap::{Fixed, DEFAULT_CAPACITY};
use crate::collections::HeapError;
use crate::test_helpers::test_rng;
use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use rand::Rng;

const PRIORITIES: [i64; 10] = [5, 3, 7, 2, 4, 6, 9, 1, 8, 10];

fn item(priority: i64) -> String {
    format!("Item {priority}")
}

fn assert_layout<O, P>(queue: &PriorityQueue<i64, String, O, P>, expected: &[i64]) {
    assert_eq!(queue.len(), expected.len());
    for (i, &priority) in expected.iter().enumerate() {
        let node = queue.get(i).unwrap();
        assert_eq!(*node.priority(), priority);
        assert_eq!(*node.value(), item(priority));
    }
}

fn min_queue(capacity: usize) -> PriorityQueue<i64, String, MinOrder<i64>, Fixed> {
    PriorityQueue::with_capacity(MinOrder::default(), capacity).unwrap()
}

#[test]
fn test_min_queue_layout_after_each_enqueue() {
    let expected: [&[i64]; 10] = [
        &[5],
        &[3, 5],
        &[3, 5, 7],
        &[2, 3, 7, 5],
        &[2, 3, 7, 5, 4],
        &[2, 3, 6, 5, 4, 7],
        &[2, 3, 6, 5, 4, 7, 9],
        &[1, 2, 6, 3, 4, 7, 9, 5],
        &[1, 2, 6, 3, 4, 7, 9, 5, 8],
        &[1, 2, 6, 3, 4, 7, 9, 5, 8, 10],
    ];

    let mut queue = min_queue(10);
    for (i, &priority) in PRIORITIES.iter().enumerate() {
        queue.enqueue(priority, item(priority)).unwrap();
        assert_layout(&queue, expected[i]);

        let lowest = *expected[i].iter().min().unwrap();
        let head = queue.peek().unwrap();
        assert_eq!(*head.priority(), lowest);
        assert_eq!(*head.value(), item(lowest));
    }
    assert!(queue.is_full());
}

#[test]
fn test_min_queue_layout_after_each_dequeue() {
    let expected: [&[i64]; 10] = [
        &[2, 3, 6, 5, 4, 7, 9, 10, 8],
        &[3, 4, 6, 5, 8, 7, 9, 10],
        &[4, 5, 6, 10, 8, 7, 9],
        &[5, 8, 6, 10, 9, 7],
        &[6, 8, 7, 10, 9],
        &[7, 8, 9, 10],
        &[8, 10, 9],
        &[9, 10],
        &[10],
        &[],
    ];

    let mut queue = min_queue(10);
    for priority in PRIORITIES {
        queue.enqueue(priority, item(priority)).unwrap();
    }
    for (i, remaining) in expected.iter().enumerate() {
        let node = queue.dequeue().unwrap();
        assert_eq!(node.into_parts(), (i as i64 + 1, item(i as i64 + 1)));
        assert_layout(&queue, remaining);
    }
    assert_eq!(queue.dequeue(), Err(QueueError::Empty));
}

#[test]
fn test_max_queue_layout() {
    let mut queue: PriorityQueue<i64, String, MaxOrder<i64>, Fixed> =
        PriorityQueue::with_capacity(MaxOrder::new(), 10).unwrap();
    for priority in PRIORITIES {
        queue.enqueue(priority, item(priority)).unwrap();
    }
    assert_layout(&queue, &[10, 9, 7, 4, 8, 5, 6, 1, 2, 3]);

    assert_eq!(queue.dequeue().unwrap().into_value(), item(10));
    assert_layout(&queue, &[9, 8, 7, 4, 3, 5, 6, 1, 2]);

    assert_eq!(queue.dequeue().unwrap().into_value(), item(9));
    assert_layout(&queue, &[8, 4, 7, 2, 3, 5, 6, 1]);
}

#[test]
fn test_first_dequeue_exposes_next_lowest() {
    let mut queue = min_queue(10);
    for priority in PRIORITIES {
        queue.enqueue(priority, item(priority)).unwrap();
    }
    assert_eq!(*queue.peek().unwrap().priority(), 1);
    assert_eq!(*queue.dequeue().unwrap().priority(), 1);
    assert_eq!(*queue.peek().unwrap().priority(), 2);
}

#[test]
fn test_empty_queue() {
    let mut queue = min_queue(3);
    assert!(queue.is_empty());
    assert!(!queue.is_full());
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.peek(), Err(QueueError::Empty));
    assert_eq!(queue.dequeue(), Err(QueueError::Empty));

    let mut queue: MinPriorityQueue<()> = MinPriorityQueue::new(MinOrder::default());
    assert_eq!(queue.peek(), Err(QueueError::Empty));
    assert_eq!(queue.dequeue(), Err(QueueError::Empty));
}

#[test]
fn test_zero_capacity_is_rejected() {
    let order = MinOrder::<i64>::default();
    let err = PriorityQueue::<i64, (), _, Fixed>::with_capacity(order, 0).unwrap_err();
    assert_eq!(err, QueueError::Heap(HeapError::InvalidCapacity));

    let err = MinPriorityQueue::<()>::with_capacity(MinOrder::default(), 0).unwrap_err();
    assert_eq!(err, QueueError::Heap(HeapError::InvalidCapacity));
}

#[test]
fn test_fixed_queue_full() {
    let mut queue = min_queue(2);
    queue.enqueue(2, item(2)).unwrap();
    queue.enqueue(1, item(1)).unwrap();
    assert!(queue.is_full());
    assert_eq!(
        queue.enqueue(0, item(0)),
        Err(QueueError::Heap(HeapError::Full { capacity: 2 }))
    );
    assert_layout(&queue, &[1, 2]);
}

#[test]
fn test_growable_queue() {
    let mut queue: MinPriorityQueue<String> = MinPriorityQueue::new(MinOrder::default());
    assert_eq!(queue.capacity(), DEFAULT_CAPACITY);
    for priority in PRIORITIES {
        queue.enqueue(priority, item(priority)).unwrap();
    }
    assert_eq!(queue.capacity(), 10);
    assert!(queue.is_full());
    queue.enqueue(0, item(0)).unwrap();
    assert_eq!(queue.capacity(), 20);

    for expected in 0..=10 {
        assert_eq!(queue.dequeue().unwrap().into_value(), item(expected));
    }
    assert!(queue.is_empty());
}

#[test]
fn test_get_out_of_range() {
    let mut queue = min_queue(4);
    queue.enqueue(1, item(1)).unwrap();
    assert_eq!(
        queue.get(1),
        Err(QueueError::Heap(HeapError::IndexOutOfRange { index: 1, len: 1 }))
    );
}

#[test]
fn test_values_are_opaque() {
    // neither comparable nor clonable
    struct Payload(u32);

    let mut queue: MinPriorityQueue<Payload> = MinPriorityQueue::new(MinOrder::default());
    queue.enqueue(20, Payload(2)).unwrap();
    queue.enqueue(10, Payload(1)).unwrap();
    queue.enqueue(30, Payload(3)).unwrap();

    let mut node = queue.dequeue().unwrap();
    assert_eq!(*node.priority(), 10);
    node.value_mut().0 += 100;
    assert_eq!(node.value().0, 101);

    assert_eq!(queue.dequeue().unwrap().into_value().0, 2);
    assert_eq!(queue.dequeue().unwrap().into_value().0, 3);
}

#[test]
fn test_equal_priorities_all_come_out() {
    let mut queue: MinPriorityQueue<char> = MinPriorityQueue::new(MinOrder::default());
    for (priority, value) in [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (2, 'e')] {
        queue.enqueue(priority, value).unwrap();
    }

    let mut ones: Vec<char> = (0..2).map(|_| queue.dequeue().unwrap().into_value()).collect();
    let mut twos: Vec<char> = (0..3).map(|_| queue.dequeue().unwrap().into_value()).collect();
    ones.sort_unstable();
    twos.sort_unstable();
    assert_eq!(ones, ['b', 'd']);
    assert_eq!(twos, ['a', 'c', 'e']);
}

#[test]
fn test_sequence_number_gives_fifo_within_priority() {
    let mut queue: MinPriorityQueue<char, (u8, u32)> = MinPriorityQueue::default();
    let arrivals = [(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
    for (seq, (priority, value)) in arrivals.into_iter().enumerate() {
        queue.enqueue((priority, seq as u32), value).unwrap();
    }
    let values: String = core::iter::from_fn(|| queue.dequeue().ok())
        .map(PriorityNode::into_value)
        .collect();
    assert_eq!(values, "bdac");
}

#[test]
fn test_into_sorted_vec_is_dequeue_order() {
    let mut queue = min_queue(10);
    for priority in PRIORITIES {
        queue.enqueue(priority, item(priority)).unwrap();
    }
    let priorities: Vec<i64> =
        queue.into_sorted_vec().into_iter().map(|node| *node.priority()).collect();
    assert_eq!(priorities, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
}

#[test]
fn test_clear() {
    let mut queue = min_queue(4);
    queue.enqueue(1, item(1)).unwrap();
    queue.enqueue(2, item(2)).unwrap();
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.capacity(), 4);
    assert_eq!(queue.peek(), Err(QueueError::Empty));
}

#[test]
fn test_clone_and_debug() {
    let mut queue: MaxPriorityQueue<&str> = MaxPriorityQueue::new(MaxOrder::new());
    queue.enqueue(1, "low").unwrap();
    queue.enqueue(2, "high").unwrap();

    let copy = queue.clone();
    queue.dequeue().unwrap();
    assert_eq!(copy.len(), 2);
    assert_eq!(
        format!("{copy:?}"),
        r#"[PriorityNode { priority: 2, value: "high" }, PriorityNode { priority: 1, value: "low" }]"#
    );
}

#[test]
fn test_random_priorities_dequeue_in_order() {
    let mut rng = test_rng();
    let mut queue: MinPriorityQueue<usize> = MinPriorityQueue::default();
    for seq in 0..500 {
        queue.enqueue(rng.gen_range(-1000..1000), seq).unwrap();
    }
    assert_eq!(queue.len(), 500);

    let mut seen = vec![false; 500];
    let mut previous = i64::MIN;
    while let Ok(node) = queue.dequeue() {
        let (priority, seq) = node.into_parts();
        assert!(priority >= previous);
        assert!(!seen[seq]);
        seen[seq] = true;
        previous = priority;
    }
    assert!(seen.into_iter().all(|s| s));
}
